use crate::diagnostic::{Diagnostic, Span, SuggestedFix, TextEdit};
use std::path::{Path, PathBuf};

pub use crate::diagnostic::Severity;

/// A diagnostic located in a file, with reporting metadata.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    pub rule_id: String,
    pub message: String,
    pub severity: Severity,
    pub file: Option<PathBuf>,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub span: Option<Span>,
    pub snippet: Option<String>,
    pub note: Option<String>,
    pub suppressed: bool,
    pub suppression_reason: Option<String>,
    pub remediation: Option<String>,
    pub fixes: Vec<SuggestedFix>,
    /// Set once fix mode has written this finding's edits to disk.
    pub fixed: bool,
}

impl Finding {
    /// Builds a finding from a rule diagnostic. Location fields are left
    /// empty; see [`crate::lint::lint_source`].
    pub fn from_diagnostic(diagnostic: Diagnostic) -> Self {
        let remediation = crate::rules::find_rule(diagnostic.rule_id).map(|r| r.remediation.to_string());
        Finding {
            rule_id: diagnostic.rule_id.to_string(),
            message: diagnostic.message,
            severity: diagnostic.severity,
            file: None,
            line: None,
            column: None,
            span: Some(diagnostic.span),
            snippet: None,
            note: diagnostic.note,
            suppressed: false,
            suppression_reason: None,
            remediation,
            fixes: diagnostic.fixes,
            fixed: false,
        }
    }

    pub fn is_fixable(&self) -> bool {
        self.fixes.iter().any(|f| !f.edits.is_empty())
    }

    /// All edits of all suggested fixes.
    pub fn edits(&self) -> impl Iterator<Item = &TextEdit> {
        self.fixes.iter().flat_map(|f| f.edits.iter())
    }
}

/// Outcome of linting one file.
#[derive(Debug, serde::Serialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub findings: Vec<Finding>,
    /// Fields carrying a non-empty `jsonschema` sub-tag.
    pub fields_checked: usize,
    pub error: Option<String>,
    pub duration_ms: u64,
}

impl FileResult {
    pub fn failed(file: &Path, error: String) -> Self {
        FileResult {
            file: file.to_path_buf(),
            findings: vec![],
            fields_checked: 0,
            error: Some(error),
            duration_ms: 0,
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct LintReport {
    pub target: String,
    pub lint_timestamp: String,
    pub status: LintStatus,
    pub strict: bool,
    pub files_scanned: usize,
    pub fields_checked: usize,
    pub file_results: Vec<FileResult>,
    pub findings: Vec<Finding>,
    pub suppressed: Vec<Finding>,
    pub fixes_applied: usize,
    pub passed: bool,
}

impl LintReport {
    pub fn from_results(
        target: &str,
        results: Vec<FileResult>,
        suppressions: &[crate::config::Suppression],
        strict: bool,
    ) -> Self {
        let files_scanned = results.len();
        let fields_checked: usize = results.iter().map(|r| r.fields_checked).sum();

        let mut active = Vec::new();
        let mut suppressed = Vec::new();

        for result in &results {
            for finding in &result.findings {
                if finding.suppressed {
                    suppressed.push(finding.clone());
                } else if let Some(s) = find_suppression(finding, suppressions) {
                    let mut f = finding.clone();
                    f.suppressed = true;
                    f.suppression_reason = Some(s.reason.clone());
                    suppressed.push(f);
                } else {
                    active.push(finding.clone());
                }
            }
        }

        let mut report = LintReport {
            target: target.to_string(),
            lint_timestamp: chrono::Utc::now().to_rfc3339(),
            status: LintStatus::Passed,
            strict,
            files_scanned,
            fields_checked,
            file_results: results,
            findings: active,
            suppressed,
            fixes_applied: 0,
            passed: true,
        };
        report.refresh_status();
        report
    }

    /// Recomputes [`status`](LintReport::status) and
    /// [`passed`](LintReport::passed) from the unfixed active findings.
    pub fn refresh_status(&mut self) {
        self.status = compute_status(&self.findings, self.strict);
        self.passed = !matches!(self.status, LintStatus::Failed);
    }

    pub fn error_count(&self) -> usize {
        self.count_by_severity().0
    }

    pub fn warning_count(&self) -> usize {
        self.count_by_severity().1
    }

    /// Count unfixed errors and warnings in a single pass.
    ///
    /// Returns `(errors, warnings)`.
    pub fn count_by_severity(&self) -> (usize, usize) {
        self.findings
            .iter()
            .filter(|f| !f.fixed)
            .fold((0, 0), |(e, w), f| match f.severity {
                Severity::Error => (e + 1, w),
                Severity::Warning => (e, w + 1),
            })
    }

    /// Files that failed to read.
    pub fn errors(&self) -> impl Iterator<Item = &FileResult> {
        self.file_results.iter().filter(|r| r.error.is_some())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintStatus {
    Passed,
    Warning,
    Failed,
}

fn compute_status(findings: &[Finding], strict: bool) -> LintStatus {
    let (has_errors, has_warnings) = findings
        .iter()
        .filter(|f| !f.fixed)
        .fold((false, false), |(e, w), f| match f.severity {
            Severity::Error => (true, w),
            Severity::Warning => (e, true),
        });

    if has_errors || (has_warnings && strict) {
        LintStatus::Failed
    } else if has_warnings {
        LintStatus::Warning
    } else {
        LintStatus::Passed
    }
}

fn find_suppression<'a>(
    finding: &Finding,
    suppressions: &'a [crate::config::Suppression],
) -> Option<&'a crate::config::Suppression> {
    suppressions.iter().find(|s| {
        if s.rule != finding.rule_id {
            return false;
        }
        // Path::ends_with matches whole components: "types.go" matches
        // "api/types.go" but not "api/mytypes.go".
        match &finding.file {
            Some(file) => {
                if !file.ends_with(Path::new(&s.file)) {
                    return false;
                }
            }
            None => {
                if !s.file.is_empty() {
                    return false;
                }
            }
        }
        if let (Some(lines), Some(line)) = (&s.lines, finding.line) {
            match parse_line_range(lines) {
                Some((start, end)) if line >= start && line <= end => {}
                _ => return false,
            }
        }
        true
    })
}

fn parse_line_range(lines: &str) -> Option<(usize, usize)> {
    match lines.split_once('-') {
        Some((start, end)) => {
            let start = start.trim().parse().ok()?;
            let end = end.trim().parse().ok()?;
            (start <= end).then_some((start, end))
        }
        None => {
            let line = lines.trim().parse().ok()?;
            Some((line, line))
        }
    }
}
