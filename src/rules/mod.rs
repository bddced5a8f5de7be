//! Lint rules and the helpers the lint runner shares with them.
//!
//! There is a single analyzer, [`nocommas::NoCommas`], which owns two rule
//! ids. Use [`all_rules`] to list them and [`collect_go_files`] to find the
//! files to feed it.

pub mod nocommas;

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

/// Metadata for a single lint rule.
///
/// Used by the `list-rules` and `explain` CLI commands and by the SARIF
/// rule descriptors.
pub struct RuleInfo {
    /// Unique rule identifier (e.g., `"jsonschema/unknown-key"`).
    pub id: &'static str,
    /// Severity as a string (`"error"` or `"warning"`).
    pub severity: &'static str,
    /// Analyzer that reports this rule.
    pub analyzer: &'static str,
    /// Message attached to every diagnostic of this rule.
    pub message: &'static str,
    /// Guidance on how to fix a violation.
    pub remediation: &'static str,
}

pub fn all_rules() -> Vec<RuleInfo> {
    nocommas::rules()
}

/// Looks up a rule by id.
pub fn find_rule(id: &str) -> Option<RuleInfo> {
    all_rules().into_iter().find(|r| r.id == id)
}

/// Recursively collects `.go` files under `path`.
///
/// `path` may also name a single file, which is returned as is when it has a
/// `.go` extension. Directories whose name appears in `exclude` are not
/// descended into. The result is sorted.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use golinter_jsonschema::rules::collect_go_files;
///
/// let files = collect_go_files(Path::new("./pkg"), &["vendor".to_string()]);
/// ```
pub fn collect_go_files(path: &Path, exclude: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_entry(|e| {
            // The root is always walked, even when its own name is excluded.
            e.depth() == 0
                || !e.file_type().is_dir()
                || !exclude
                    .iter()
                    .any(|x| e.file_name().to_string_lossy() == x.as_str())
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "go"))
        .collect();
    files.sort();
    files
}

/// Returns `true` if `trailing` (the text after a tag on its line) holds an
/// inline suppression comment.
///
/// Recognized markers:
/// - `//nolint` (all linters)
/// - `//nolint:nocommas`, also inside a list such as `//nolint:lll,nocommas`
/// - `// golinter-jsonschema:ignore`
///
/// # Examples
///
/// ```
/// use golinter_jsonschema::rules::is_suppressed_inline;
///
/// assert!(is_suppressed_inline(" //nolint:nocommas // legacy API"));
/// assert!(is_suppressed_inline(" // golinter-jsonschema:ignore"));
/// assert!(!is_suppressed_inline(" //nolint:lll"));
/// ```
pub fn is_suppressed_inline(trailing: &str) -> bool {
    static RE_INLINE_SUPPRESS: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(
            r"//\s*(?:nolint(?::[\w,-]*\bnocommas\b[\w,-]*)?|golinter-jsonschema:ignore)(?:\s|$)",
        )
        .unwrap()
    });
    RE_INLINE_SUPPRESS.is_match(trailing)
}
