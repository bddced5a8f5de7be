//! Configuration loading and management.
//!
//! Provides types for the TOML-based configuration file and for finding-suppression
//! rules stored in `.golinter-jsonschema-ignore` files.
//!
//! # Configuration file
//!
//! The default configuration file is `golinter-jsonschema.toml` in the current
//! working directory. Use [`Config::load`] to read it:
//!
//! ```rust,no_run
//! use golinter_jsonschema::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert!(config.rules.unknown_key);
//! ```
//!
//! # Suppression files
//!
//! Place a `.golinter-jsonschema-ignore` file in the linted directory to
//! suppress specific findings. See [`Suppression`] for the format and
//! [`load_suppressions`] for loading.

use crate::error::LintError;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "golinter-jsonschema.toml";
pub const SUPPRESSION_FILE: &str = ".golinter-jsonschema-ignore";

/// Main configuration for the linter.
///
/// All fields carry defaults so the config file can be omitted entirely.
///
/// ```toml
/// [rules]
/// unescaped_comma = false
///
/// [strict]
/// enabled = true
///
/// [files]
/// exclude = ["vendor", "testdata", "third_party"]
/// ```
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Per-rule on/off toggles.
    pub rules: RulesConfig,
    /// When strict mode is enabled, warnings are promoted to failures.
    pub strict: StrictConfig,
    /// Which files are linted.
    pub files: FilesConfig,
}

/// Per-rule on/off toggles. Both rules default to **enabled**.
///
/// Disabling `unknown_key` also stops unknown keys from short-circuiting
/// the comma check for that field.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RulesConfig {
    /// `jsonschema/unknown-key`
    pub unknown_key: bool,
    /// `jsonschema/unescaped-comma`
    pub unescaped_comma: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            unknown_key: true,
            unescaped_comma: true,
        }
    }
}

/// Strict-mode configuration.
///
/// When [`enabled`](StrictConfig::enabled) is `true`, any unfixed finding
/// with [`Severity::Warning`](crate::diagnostic::Severity::Warning) fails
/// the run.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StrictConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Directory names that are never descended into.
    pub exclude: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            exclude: vec![
                "vendor".to_string(),
                "testdata".to_string(),
                ".git".to_string(),
            ],
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `golinter-jsonschema.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns a [`LintError`] when the explicit path does not exist, the
    /// file cannot be read, or its TOML fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, LintError> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => return Err(LintError::ConfigNotFound(p.to_path_buf())),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        let Some(path) = config_path else {
            return Ok(Config::default());
        };

        let content = std::fs::read_to_string(&path).map_err(|source| LintError::Read {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&content)
            .map_err(|source| LintError::ConfigParse { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Root structure of a `.golinter-jsonschema-ignore` TOML file.
///
/// # File format
///
/// ```toml
/// [[suppress]]
/// rule = "jsonschema/unknown-key"
/// file = "api/types.go"
/// lines = "10-20"
/// reason = "Custom keyword consumed by our generator"
/// ```
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct SuppressionFile {
    pub suppress: Vec<Suppression>,
}

/// A rule that silences a specific finding.
///
/// # Matching
///
/// A suppression matches a [`Finding`](crate::finding::Finding) when:
/// - `rule` equals the finding's `rule_id`.
/// - `file` is a path suffix of the finding's file (empty string acts as a wildcard).
/// - `lines` (if set) contains the finding's line number.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Suppression {
    /// Rule ID to suppress (e.g., `"jsonschema/unescaped-comma"`).
    pub rule: String,
    /// Relative file path to match, or an empty string for all files.
    pub file: String,
    /// Optional line range (`"10-20"`) or single line (`"15"`).
    pub lines: Option<String>,
    /// Human-readable justification for the suppression.
    pub reason: String,
    /// Optional issue-tracker reference (e.g., `"JIRA-1234"`).
    pub ticket: Option<String>,
}

/// Loads suppression rules from `.golinter-jsonschema-ignore` in `dir`.
///
/// Returns an empty vector when the file is absent or unreadable; a parse
/// failure is logged and also yields an empty vector.
pub fn load_suppressions(dir: &Path) -> Vec<Suppression> {
    let ignore_path = dir.join(SUPPRESSION_FILE);
    if !ignore_path.exists() {
        return vec![];
    }

    let Ok(content) = std::fs::read_to_string(&ignore_path) else {
        return vec![];
    };

    match toml::from_str::<SuppressionFile>(&content) {
        Ok(file) => file.suppress,
        Err(e) => {
            tracing::warn!(path = %ignore_path.display(), "failed to parse suppression file: {e}");
            vec![]
        }
    }
}
