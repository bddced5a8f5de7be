//! Rendering of a [`LintReport`] for people and tools.
//!
//! Every format reports the same things: active findings located by
//! `file:line:column` with the offending tag, the comma-escaping fix where one
//! exists, suppressed findings with their reason, files that could not be
//! read, and the error/warning/suppressed/fixed totals. Findings already
//! fixed by `--fix` are shown as fixed (pretty), counted under `fixed`
//! (JSON), or left out (SARIF).
//!
//! | Format | Module | Fixes rendered as |
//! |--------|--------|-------------------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | the rewritten tag body |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | `fixes[].edits[]` with byte spans |
//! | [`Sarif`](OutputFormat::Sarif)   | [`sarif`]  | artifact replacements |

pub mod json;
pub mod pretty;
pub mod sarif;

use crate::finding::LintReport;

/// Supported output formats for lint reports.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text.
    Pretty,
    /// Machine-readable JSON, including suggested fixes.
    Json,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) for CI/CD tool integration.
    Sarif,
}

/// Formats a [`LintReport`] in the requested [`OutputFormat`].
///
/// # Examples
///
/// ```rust,no_run
/// use golinter_jsonschema::output::{format_report, OutputFormat};
/// # use golinter_jsonschema::finding::LintReport;
/// # fn example(report: &LintReport) {
/// let json = format_report(report, &OutputFormat::Json);
/// println!("{json}");
/// # }
/// ```
pub fn format_report(report: &LintReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(report),
        OutputFormat::Json => json::format(report),
        OutputFormat::Sarif => sarif::format(report),
    }
}
