//! [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) formatter.
//!
//! Every rule known to the linter is listed as a reporting descriptor so
//! rule indices stay stable between runs. Suggested fixes are emitted as
//! artifact replacements addressed by byte offset. Suppressed findings are
//! kept as results carrying a `suppressions` entry: `inSource` for a
//! `//nolint` comment, `external` for the ignore file.

use crate::finding::{Finding, LintReport, Severity};
use crate::lint::INLINE_SUPPRESSION_REASON;
use crate::rules;
use serde_sarif::sarif::{
    ArtifactChange, ArtifactContent, ArtifactLocation, Fix, Location, Message,
    MultiformatMessageString, PhysicalLocation, Region, Replacement, ReportingDescriptor,
    Result as SarifResult, ResultLevel, Run, Sarif, Suppression, Tool, ToolComponent,
};
use std::collections::HashMap;

pub fn format(report: &LintReport) -> String {
    let known = rules::all_rules();

    let rule_index: HashMap<&str, i64> = known
        .iter()
        .enumerate()
        .map(|(i, r)| (r.id, i as i64))
        .collect();

    let descriptors: Vec<ReportingDescriptor> = known
        .iter()
        .map(|r| {
            let mut rule = ReportingDescriptor::builder().id(r.id.to_string()).build();
            rule.short_description = Some(
                MultiformatMessageString::builder()
                    .text(r.message.to_string())
                    .build(),
            );
            rule.help = Some(
                MultiformatMessageString::builder()
                    .text(r.remediation.to_string())
                    .build(),
            );
            rule
        })
        .collect();

    let results: Vec<SarifResult> = report
        .findings
        .iter()
        .filter(|f| !f.fixed)
        .chain(report.suppressed.iter())
        .map(|f| to_result(f, &rule_index))
        .collect();

    let driver = ToolComponent::builder()
        .name("golinter-jsonschema")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(descriptors)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}

fn to_result(f: &Finding, rule_index: &HashMap<&str, i64>) -> SarifResult {
    let level = match f.severity {
        Severity::Error => ResultLevel::Error,
        Severity::Warning => ResultLevel::Warning,
    };

    let text = match &f.note {
        Some(note) => format!("{} ({note})", f.message),
        None => f.message.clone(),
    };

    let mut result = SarifResult::builder()
        .message(Message::builder().text(text).build())
        .build();

    result.rule_id = Some(f.rule_id.clone());
    result.level = Some(level);
    result.rule_index = rule_index.get(f.rule_id.as_str()).copied();

    if f.suppressed {
        result.suppressions = Some(vec![to_suppression(f)]);
    }

    let Some(ref file) = f.file else {
        return result;
    };
    let uri = file.to_string_lossy().replace('\\', "/");

    let mut region = Region::builder().build();
    region.start_line = f.line.map(|l| l as i64);
    region.start_column = f.column.map(|c| c as i64);
    if let Some(span) = f.span {
        region.byte_offset = Some(span.start as i64);
        region.byte_length = Some(span.len() as i64);
    }

    let mut physical = PhysicalLocation::builder().build();
    physical.artifact_location = Some(ArtifactLocation::builder().uri(uri.clone()).build());
    physical.region = Some(region);

    let mut location = Location::builder().build();
    location.physical_location = Some(physical);
    result.locations = Some(vec![location]);

    if !f.suppressed && f.is_fixable() {
        let fixes: Vec<Fix> = f
            .fixes
            .iter()
            .map(|fix| {
                let replacements: Vec<Replacement> = fix
                    .edits
                    .iter()
                    .map(|edit| {
                        let mut deleted = Region::builder().build();
                        deleted.byte_offset = Some(edit.span.start as i64);
                        deleted.byte_length = Some(edit.span.len() as i64);
                        let mut replacement = Replacement::builder().deleted_region(deleted).build();
                        replacement.inserted_content =
                            Some(ArtifactContent::builder().text(edit.new_text.clone()).build());
                        replacement
                    })
                    .collect();
                let change = ArtifactChange::builder()
                    .artifact_location(ArtifactLocation::builder().uri(uri.clone()).build())
                    .replacements(replacements)
                    .build();
                let mut sarif_fix = Fix::builder().artifact_changes(vec![change]).build();
                sarif_fix.description = Some(Message::builder().text(fix.message.clone()).build());
                sarif_fix
            })
            .collect();
        result.fixes = Some(fixes);
    }

    result
}

fn to_suppression(f: &Finding) -> Suppression {
    let reason = f.suppression_reason.as_deref();
    let kind = if reason == Some(INLINE_SUPPRESSION_REASON) {
        "inSource"
    } else {
        "external"
    };

    let mut suppression = Suppression::builder()
        .kind(serde_json::Value::from(kind))
        .build();
    suppression.justification = reason.map(str::to_string);
    suppression
}
