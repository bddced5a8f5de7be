//! Lint orchestration.
//!
//! [`run_lint`] is the main entry-point: it collects the Go files under a
//! path, checks them **in parallel** via [rayon] with the
//! [`NoCommas`](crate::rules::nocommas::NoCommas) rule, applies suppressions
//! and produces a [`LintReport`]. [`apply_fixes`] then optionally writes the
//! suggested edits back to disk.

use crate::config::{self, Config};
use crate::error::LintError;
use crate::finding::{FileResult, Finding, LintReport};
use crate::fix;
use crate::rules::{self, nocommas::NoCommas};
use crate::syntax::LineIndex;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Longest snippet kept on a finding, in chars.
const MAX_SNIPPET_CHARS: usize = 120;

/// Suppression reason of findings silenced by a comment on the tag's line.
pub const INLINE_SUPPRESSION_REASON: &str = "inline suppression";

/// Lints a directory tree or a single Go file.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use golinter_jsonschema::{config::Config, lint};
///
/// let config = Config::load(None).unwrap();
/// let report = lint::run_lint(Path::new("./pkg"), &config);
///
/// std::process::exit(if report.passed { 0 } else { 1 });
/// ```
pub fn run_lint(path: &Path, config: &Config) -> LintReport {
    let rule = NoCommas::from_config(&config.rules);
    let files = rules::collect_go_files(path, &config.files.exclude);
    tracing::debug!(path = %path.display(), files = files.len(), "linting");

    // par_iter().map().collect() keeps the (sorted) input order.
    let results: Vec<FileResult> = files.par_iter().map(|file| lint_file(file, &rule)).collect();

    let suppression_dir = if path.is_dir() {
        path
    } else {
        path.parent().unwrap_or(Path::new("."))
    };
    let suppressions = config::load_suppressions(suppression_dir);

    LintReport::from_results(
        &target_name(path),
        results,
        &suppressions,
        config.strict.enabled,
    )
}

/// Reads and lints one file. Read failures are recorded on the result.
pub fn lint_file(file: &Path, rule: &NoCommas) -> FileResult {
    let start = Instant::now();
    let source = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(path = %file.display(), "skipping unreadable file: {e}");
            return FileResult::failed(file, format!("Failed to read file: {e}"));
        }
    };

    let mut result = lint_source(file, &source, rule);
    result.duration_ms = start.elapsed().as_millis() as u64;
    result
}

/// Lints Go `source` that was read from `file`.
///
/// Findings get their line and column, the tag text as snippet, and are
/// marked suppressed when the tag's line ends with an inline suppression
/// comment (see [`rules::is_suppressed_inline`]).
pub fn lint_source(file: &Path, source: &str, rule: &NoCommas) -> FileResult {
    let checked = rule.check_source(source);
    let index = LineIndex::new(source);

    let findings = checked
        .diagnostics
        .into_iter()
        .map(|diagnostic| {
            let span = diagnostic.span;
            let (line, column) = index.line_col(span.start);
            let mut finding = Finding::from_diagnostic(diagnostic);
            finding.file = Some(file.to_path_buf());
            finding.line = Some(line);
            finding.column = Some(column);
            finding.snippet = source.get(span.start..span.end).map(truncate_snippet);
            if rules::is_suppressed_inline(index.rest_of_line(span.end)) {
                finding.suppressed = true;
                finding.suppression_reason = Some(INLINE_SUPPRESSION_REASON.to_string());
            }
            finding
        })
        .collect();

    FileResult {
        file: file.to_path_buf(),
        findings,
        fields_checked: checked.fields_checked,
        error: None,
        duration_ms: 0,
    }
}

/// Writes the suggested edits of every active finding to disk.
///
/// Edits are grouped per file and applied in one pass. Fixed findings are
/// flagged [`fixed`](Finding::fixed) and the report status is recomputed.
/// Returns the number of findings fixed.
///
/// # Errors
///
/// Stops at the first file that cannot be read, rewritten or written back.
/// Files handled before it keep their fixes and are counted on the report.
pub fn apply_fixes(report: &mut LintReport) -> Result<usize, LintError> {
    let mut by_file: BTreeMap<PathBuf, Vec<usize>> = BTreeMap::new();
    for (i, finding) in report.findings.iter().enumerate() {
        if finding.fixed || !finding.is_fixable() {
            continue;
        }
        if let Some(file) = &finding.file {
            by_file.entry(file.clone()).or_default().push(i);
        }
    }

    let mut fixed = 0;
    let mut outcome = Ok(());
    for (file, indices) in by_file {
        let mut edits = Vec::new();
        for &i in &indices {
            edits.extend(report.findings[i].edits().cloned());
        }
        if let Err(e) = fix::fix_file(&file, &edits) {
            outcome = Err(e);
            break;
        }
        for i in indices {
            report.findings[i].fixed = true;
            fixed += 1;
        }
    }

    report.fixes_applied += fixed;
    report.refresh_status();
    outcome.map(|()| fixed)
}

/// Returns the last path component, or the whole path when it has none.
fn target_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn truncate_snippet(text: &str) -> String {
    match text.char_indices().nth(MAX_SNIPPET_CHARS - 3) {
        Some((cut, _)) if text.chars().count() > MAX_SNIPPET_CHARS => {
            format!("{}...", &text[..cut])
        }
        _ => text.to_string(),
    }
}
