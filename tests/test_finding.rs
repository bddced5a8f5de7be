use std::path::{Path, PathBuf};

use golinter_jsonschema::config::Suppression;
use golinter_jsonschema::finding::{FileResult, Finding, LintReport, LintStatus, Severity};
use golinter_jsonschema::lint::lint_source;
use golinter_jsonschema::rules::nocommas::{NoCommas, UNESCAPED_COMMA, UNKNOWN_KEY};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_finding(file: &str, line: usize, severity: Severity) -> Finding {
    Finding {
        rule_id: UNESCAPED_COMMA.to_string(),
        message: "comma".to_string(),
        severity,
        file: Some(PathBuf::from(file)),
        line: Some(line),
        column: Some(1),
        span: None,
        snippet: None,
        note: None,
        suppressed: false,
        suppression_reason: None,
        remediation: None,
        fixes: vec![],
        fixed: false,
    }
}

fn make_suppression(file: &str, lines: Option<&str>) -> Suppression {
    Suppression {
        rule: UNESCAPED_COMMA.to_string(),
        file: file.to_string(),
        lines: lines.map(str::to_string),
        reason: "approved".to_string(),
        ticket: None,
    }
}

fn file_result(findings: Vec<Finding>) -> FileResult {
    FileResult {
        file: PathBuf::from("types.go"),
        findings,
        fields_checked: 1,
        error: None,
        duration_ms: 0,
    }
}

fn build_report(findings: Vec<Finding>, suppressions: &[Suppression], strict: bool) -> LintReport {
    LintReport::from_results("pkg", vec![file_result(findings)], suppressions, strict)
}

// ---------------------------------------------------------------------------
// Suppression matching
// ---------------------------------------------------------------------------

#[test]
fn suppression_matches_exact_filename() {
    let report = build_report(
        vec![make_finding("/src/api/types.go", 5, Severity::Warning)],
        &[make_suppression("types.go", None)],
        false,
    );
    assert!(report.findings.is_empty());
    assert_eq!(report.suppressed.len(), 1);
    assert_eq!(report.suppressed[0].suppression_reason.as_deref(), Some("approved"));
}

#[test]
fn suppression_matches_multicomponent_suffix() {
    let report = build_report(
        vec![make_finding("/src/api/types.go", 5, Severity::Warning)],
        &[make_suppression("api/types.go", None)],
        false,
    );
    assert!(report.findings.is_empty());
}

#[test]
fn suppression_does_not_match_filename_with_same_suffix() {
    let report = build_report(
        vec![make_finding("/src/api/mytypes.go", 5, Severity::Warning)],
        &[make_suppression("types.go", None)],
        false,
    );
    assert_eq!(report.findings.len(), 1);
    assert!(report.suppressed.is_empty());
}

#[test]
fn suppression_does_not_match_different_directory() {
    let report = build_report(
        vec![make_finding("/src/other/types.go", 5, Severity::Warning)],
        &[make_suppression("api/types.go", None)],
        false,
    );
    assert_eq!(report.findings.len(), 1);
}

#[test]
fn suppression_requires_matching_rule() {
    let mut suppression = make_suppression("types.go", None);
    suppression.rule = UNKNOWN_KEY.to_string();
    let report = build_report(
        vec![make_finding("types.go", 5, Severity::Warning)],
        &[suppression],
        false,
    );
    assert_eq!(report.findings.len(), 1);
}

#[test]
fn valid_line_range_suppresses_finding_within_range() {
    let report = build_report(
        vec![make_finding("types.go", 75, Severity::Warning)],
        &[make_suppression("types.go", Some("50-100"))],
        false,
    );
    assert!(report.findings.is_empty());
}

#[test]
fn single_line_suppresses_only_that_line() {
    let report = build_report(
        vec![
            make_finding("types.go", 7, Severity::Warning),
            make_finding("types.go", 8, Severity::Warning),
        ],
        &[make_suppression("types.go", Some("7"))],
        false,
    );
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].line, Some(8));
}

#[test]
fn inverted_line_range_does_not_suppress_finding() {
    let report = build_report(
        vec![make_finding("types.go", 75, Severity::Warning)],
        &[make_suppression("types.go", Some("100-50"))],
        false,
    );
    assert_eq!(report.findings.len(), 1);
    assert!(report.suppressed.is_empty());
}

#[test]
fn inline_suppressed_findings_stay_suppressed() {
    let mut finding = make_finding("types.go", 3, Severity::Error);
    finding.suppressed = true;
    let report = build_report(vec![finding], &[], false);
    assert!(report.findings.is_empty());
    assert_eq!(report.suppressed.len(), 1);
    assert!(report.passed);
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[test]
fn no_findings_passes() {
    let report = build_report(vec![], &[], false);
    assert_eq!(report.status, LintStatus::Passed);
    assert!(report.passed);
}

#[test]
fn warnings_only_is_warning_but_passes() {
    let report = build_report(vec![make_finding("types.go", 1, Severity::Warning)], &[], false);
    assert_eq!(report.status, LintStatus::Warning);
    assert!(report.passed);
}

#[test]
fn strict_mode_fails_on_warnings() {
    let report = build_report(vec![make_finding("types.go", 1, Severity::Warning)], &[], true);
    assert_eq!(report.status, LintStatus::Failed);
    assert!(!report.passed);
}

#[test]
fn errors_fail() {
    let report = build_report(
        vec![
            make_finding("types.go", 1, Severity::Error),
            make_finding("types.go", 2, Severity::Warning),
        ],
        &[],
        false,
    );
    assert_eq!(report.status, LintStatus::Failed);
    assert_eq!(report.count_by_severity(), (1, 1));
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.warning_count(), 1);
}

#[test]
fn fixed_findings_no_longer_count() {
    let mut report = build_report(vec![make_finding("types.go", 1, Severity::Warning)], &[], true);
    assert!(!report.passed);

    report.findings[0].fixed = true;
    report.refresh_status();

    assert_eq!(report.status, LintStatus::Passed);
    assert!(report.passed);
    assert_eq!(report.warning_count(), 0);
}

#[test]
fn totals_are_summed_over_files() {
    let results = vec![file_result(vec![]), file_result(vec![])];
    let report = LintReport::from_results("pkg", results, &[], false);
    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.fields_checked, 2);
}

#[test]
fn unreadable_files_are_listed_as_errors() {
    let results = vec![
        file_result(vec![]),
        FileResult::failed(Path::new("broken.go"), "Failed to read file".to_string()),
    ];
    let report = LintReport::from_results("pkg", results, &[], false);
    let errors: Vec<_> = report.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].file, PathBuf::from("broken.go"));
}

// ---------------------------------------------------------------------------
// lint_source
// ---------------------------------------------------------------------------

#[test]
fn lint_source_locates_findings() {
    let source = "package p\n\ntype T struct {\n\tName string `jsonschema:\"description=a, b\"`\n}\n";
    let result = lint_source(Path::new("types.go"), source, &NoCommas::default());

    assert_eq!(result.fields_checked, 1);
    assert_eq!(result.findings.len(), 1);
    let finding = &result.findings[0];
    assert_eq!(finding.file.as_deref(), Some(Path::new("types.go")));
    assert_eq!(finding.line, Some(4));
    assert_eq!(finding.column, Some(14));
    assert_eq!(
        finding.snippet.as_deref(),
        Some("`jsonschema:\"description=a, b\"`")
    );
    assert!(finding.remediation.is_some());
    assert!(finding.is_fixable());
    assert!(!finding.suppressed);
}

#[test]
fn lint_source_honors_inline_suppression() {
    let source = "package p\n\ntype T struct {\n\
        \tA string `jsonschema:\"description=a, b\"` //nolint:nocommas\n\
        \tB string `jsonschema:\"description=a, b\"` // golinter-jsonschema:ignore\n\
        \tC string `jsonschema:\"description=a, b\"` //nolint\n\
        \tD string `jsonschema:\"description=a, b\"` //nolint:lll\n}\n";
    let result = lint_source(Path::new("types.go"), source, &NoCommas::default());

    let suppressed: Vec<bool> = result.findings.iter().map(|f| f.suppressed).collect();
    assert_eq!(suppressed, [true, true, true, false]);
}

#[test]
fn long_snippets_are_truncated() {
    let description = "x".repeat(200);
    let source = format!(
        "package p\n\ntype T struct {{\n\tA string `jsonschema:\"nope={description}\"`\n}}\n"
    );
    let result = lint_source(Path::new("types.go"), &source, &NoCommas::default());
    let snippet = result.findings[0].snippet.as_deref().unwrap();
    assert_eq!(snippet.chars().count(), 120);
    assert!(snippet.ends_with("..."));
}
