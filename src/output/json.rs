//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document containing run metadata, a
//! severity summary, active findings (with their suggested fixes), and
//! suppressed findings.

use crate::finding::{Finding, LintReport, LintStatus};

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    target: &'a str,
    lint_timestamp: &'a str,
    status: LintStatus,
    passed: bool,
    summary: Summary,
    findings: &'a [Finding],
    suppressed: &'a [Finding],
    errors: Vec<FileError<'a>>,
}

#[derive(serde::Serialize)]
struct Summary {
    files_scanned: usize,
    fields_checked: usize,
    errors: usize,
    warnings: usize,
    suppressed: usize,
    fixed: usize,
}

#[derive(serde::Serialize)]
struct FileError<'a> {
    file: &'a std::path::Path,
    error: &'a str,
}

/// Formats a [`LintReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &LintReport) -> String {
    let (errors, warnings) = report.count_by_severity();
    let output = JsonOutput {
        target: &report.target,
        lint_timestamp: &report.lint_timestamp,
        status: report.status,
        passed: report.passed,
        summary: Summary {
            files_scanned: report.files_scanned,
            fields_checked: report.fields_checked,
            errors,
            warnings,
            suppressed: report.suppressed.len(),
            fixed: report.fixes_applied,
        },
        findings: &report.findings,
        suppressed: &report.suppressed,
        errors: report
            .errors()
            .map(|r| FileError {
                file: &r.file,
                error: r.error.as_deref().unwrap_or_default(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
