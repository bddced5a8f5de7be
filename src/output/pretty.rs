//! Human-readable colored text formatter.
//!
//! Produces a terminal-friendly report with ANSI color codes: findings with
//! source locations and the tag that triggered them, suggested fixes,
//! suppressed items, unreadable files, and a one-line summary.

use crate::finding::{LintReport, LintStatus, Severity};
use colored::Colorize;

/// Formats a [`LintReport`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header**: target and timestamp.
/// 2. **Findings**: active findings with severity, rule, location, snippet and fix.
/// 3. **Suppressed**: suppressed findings with reasons.
/// 4. **Errors**: files that could not be read.
/// 5. **Summary**: overall status and counts.
pub fn format(report: &LintReport) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "\n{}\n",
        format!("  JSON Schema Tag Lint: {}  ", report.target)
            .bold()
            .on_blue()
            .white()
    ));
    out.push_str(&format!("  Timestamp: {}\n", report.lint_timestamp));
    out.push_str(&format!(
        "  {} files scanned, {} tagged fields checked\n\n",
        report.files_scanned, report.fields_checked
    ));

    if !report.findings.is_empty() {
        out.push_str(&format!("{}\n", "Findings".bold().underline()));
        for finding in &report.findings {
            let severity_str = if finding.fixed {
                "FIXED".green().bold().to_string()
            } else {
                match finding.severity {
                    Severity::Error => "ERROR".red().bold().to_string(),
                    Severity::Warning => " WARN".yellow().bold().to_string(),
                }
            };

            let location = match (&finding.file, finding.line, finding.column) {
                (Some(f), Some(l), Some(c)) => format!("{}:{}:{}", f.display(), l, c),
                (Some(f), Some(l), None) => format!("{}:{}", f.display(), l),
                (Some(f), None, _) => format!("{}", f.display()),
                _ => String::new(),
            };

            out.push_str(&format!(
                "  [{severity_str}] {rule_id:<28} {message}\n",
                rule_id = finding.rule_id.dimmed(),
                message = finding.message,
            ));
            if !location.is_empty() {
                out.push_str(&format!("         {}\n", location.dimmed()));
            }
            if let Some(ref snippet) = finding.snippet {
                out.push_str(&format!("         > {}\n", snippet.dimmed()));
            }
            if let Some(ref note) = finding.note {
                out.push_str(&format!("         note: {note}\n"));
            }
            if !finding.fixed {
                for fix in &finding.fixes {
                    out.push_str(&format!("         {}: {}\n", "fix".cyan(), fix.message));
                    for edit in &fix.edits {
                        out.push_str(&format!("           + {}\n", edit.new_text.green()));
                    }
                }
            }
        }
        out.push('\n');
    }

    if !report.suppressed.is_empty() {
        out.push_str(&format!(
            "{} ({} suppressed)\n",
            "Suppressed".bold().underline(),
            report.suppressed.len()
        ));
        for finding in &report.suppressed {
            let reason = finding
                .suppression_reason
                .as_deref()
                .unwrap_or("no reason given");
            let location = match (&finding.file, finding.line) {
                (Some(f), Some(l)) => format!("{}:{}", f.display(), l),
                _ => String::new(),
            };
            out.push_str(&format!(
                "  [SKIP] {:<28} {} {}\n",
                finding.rule_id.dimmed(),
                location.dimmed(),
                reason.dimmed(),
            ));
        }
        out.push('\n');
    }

    let mut unreadable = report.errors().peekable();
    if unreadable.peek().is_some() {
        out.push_str(&format!("{}\n", "Errors".bold().underline()));
        for result in unreadable {
            out.push_str(&format!(
                "  [{}] {} {}\n",
                "FAIL".red().bold(),
                result.file.display(),
                result.error.as_deref().unwrap_or_default().dimmed(),
            ));
        }
        out.push('\n');
    }

    let status_str = match report.status {
        LintStatus::Passed => "PASSED".green().bold().to_string(),
        LintStatus::Warning => "WARNING".yellow().bold().to_string(),
        LintStatus::Failed => "FAILED".red().bold().to_string(),
    };

    let (errors, warnings) = report.count_by_severity();
    out.push_str(&format!(
        "Result: {status_str}  |  {} errors, {} warnings, {} suppressed, {} fixed\n",
        errors,
        warnings,
        report.suppressed.len(),
        report.fixes_applied,
    ));

    out
}
