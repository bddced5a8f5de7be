//! Error type for the lint host.
//!
//! The rule engine itself never fails; these errors come from reading
//! configuration, reading sources and writing fixes.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Edit range {start}..{end} is out of bounds for a source of {len} bytes")]
    EditOutOfBounds { start: usize, end: usize, len: usize },

    #[error("Overlapping edits at byte {0}")]
    OverlappingEdits(usize),
}
