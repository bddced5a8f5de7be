//! The `nocommas` rule: JSON Schema keys and commas in `jsonschema` tags.
//!
//! # Rules
//!
//! | ID | Sev | What it checks |
//! |----|-----|----------------|
//! | `jsonschema/unknown-key` | Error | Every key must be a JSON Schema keyword |
//! | `jsonschema/unescaped-comma` | Warning | Values must escape their commas as `\,` |
//!
//! Each tagged field is checked on its own. The first unknown key reports
//! once and ends the field's checks; otherwise all values are scanned for
//! unescaped commas and a single diagnostic carries a fix escaping all of
//! them.

use crate::config::RulesConfig;
use crate::decode::{self, TagPairs};
use crate::diagnostic::{Diagnostic, Severity, SuggestedFix, TextEdit};
use crate::keys;
use crate::rules::RuleInfo;
use crate::syntax::{self, TagLiteral, TaggedField};
use crate::tag;

pub const UNKNOWN_KEY: &str = "jsonschema/unknown-key";
pub const UNESCAPED_COMMA: &str = "jsonschema/unescaped-comma";

pub const UNKNOWN_KEY_MESSAGE: &str = "JSON Schema fields must use allowed keys";
pub const UNESCAPED_COMMA_MESSAGE: &str = "JSON Schema description fields should not contain commas";
pub const ESCAPE_FIX_MESSAGE: &str = "Add escape for comma in description";

/// Diagnostics for one source file.
#[derive(Debug, Default)]
pub struct SourceDiagnostics {
    pub diagnostics: Vec<Diagnostic>,
    /// Fields carrying a non-empty `jsonschema` sub-tag.
    pub fields_checked: usize,
}

/// The rule engine. Holds only its toggles, so one value can be shared by
/// every worker thread.
#[derive(Debug, Clone, Copy)]
pub struct NoCommas {
    check_unknown_keys: bool,
    check_commas: bool,
}

impl Default for NoCommas {
    fn default() -> Self {
        NoCommas {
            check_unknown_keys: true,
            check_commas: true,
        }
    }
}

impl NoCommas {
    pub const NAME: &'static str = "nocommas";

    pub fn from_config(rules: &RulesConfig) -> Self {
        NoCommas {
            check_unknown_keys: rules.unknown_key,
            check_commas: rules.unescaped_comma,
        }
    }

    /// Parses `source` as Go and checks every struct field.
    pub fn check_source(&self, source: &str) -> SourceDiagnostics {
        let mut out = SourceDiagnostics::default();
        for field in syntax::field_sites(source) {
            if self.check_field_into(&field, &mut out.diagnostics) {
                out.fields_checked += 1;
            }
        }
        out
    }

    /// Checks a single field.
    pub fn check_field<F: TaggedField>(&self, field: &F) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        self.check_field_into(field, &mut diagnostics);
        diagnostics
    }

    /// Returns `true` when the field carried a `jsonschema` payload.
    fn check_field_into<F: TaggedField>(&self, field: &F, out: &mut Vec<Diagnostic>) -> bool {
        let Some(literal) = field.tag() else {
            return false;
        };
        let Some(sub) = tag::extract(literal.body(), tag::JSONSCHEMA) else {
            return false;
        };
        if sub.payload.is_empty() {
            return false;
        }

        let pairs = decode::decode(sub.payload);

        if self.check_unknown_keys {
            if let Some(key) = pairs.keys().find(|k| !keys::is_allowed(k)) {
                out.push(Diagnostic {
                    rule_id: UNKNOWN_KEY,
                    severity: Severity::Error,
                    span: literal.span(),
                    message: UNKNOWN_KEY_MESSAGE.to_string(),
                    note: Some(format!("`{key}` is not a JSON Schema keyword")),
                    fixes: vec![],
                });
                return true;
            }
        }

        if self.check_commas {
            if let Some(diagnostic) = comma_diagnostic(literal, sub.offset, &pairs) {
                out.push(diagnostic);
            }
        }
        true
    }
}

fn comma_diagnostic(literal: &TagLiteral, payload_offset: usize, pairs: &TagPairs) -> Option<Diagnostic> {
    let offending: Vec<&str> = pairs
        .iter()
        .filter(|p| p.has_unescaped_comma())
        .map(|p| p.key())
        .collect();
    if offending.is_empty() {
        return None;
    }

    // Body offsets of the commas to escape, ascending.
    let mut commas: Vec<usize> = pairs
        .iter()
        .flat_map(|p| p.commas())
        .filter(|c| !c.escaped)
        .map(|c| payload_offset + c.offset)
        .collect();
    commas.sort_unstable();

    let body = literal.body();
    let mut escaped = String::with_capacity(body.len() + commas.len());
    let mut last = 0;
    for at in commas {
        escaped.push_str(&body[last..at]);
        escaped.push('\\');
        last = at;
    }
    escaped.push_str(&body[last..]);

    let keys = offending
        .iter()
        .map(|k| format!("`{k}`"))
        .collect::<Vec<_>>()
        .join(", ");

    Some(Diagnostic {
        rule_id: UNESCAPED_COMMA,
        severity: Severity::Warning,
        span: literal.span(),
        message: UNESCAPED_COMMA_MESSAGE.to_string(),
        note: Some(format!("unescaped comma in {keys}")),
        fixes: vec![SuggestedFix {
            message: ESCAPE_FIX_MESSAGE.to_string(),
            edits: vec![TextEdit {
                span: literal.body_span(),
                new_text: escaped,
            }],
        }],
    })
}

pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: UNKNOWN_KEY,
            severity: "error",
            analyzer: NoCommas::NAME,
            message: UNKNOWN_KEY_MESSAGE,
            remediation: "Use only JSON Schema keywords (title, description, enum, ...) as jsonschema tag keys",
        },
        RuleInfo {
            id: UNESCAPED_COMMA,
            severity: "warning",
            analyzer: NoCommas::NAME,
            message: UNESCAPED_COMMA_MESSAGE,
            remediation: "Escape commas inside jsonschema tag values as \\, (run with --fix to rewrite the tag)",
        },
    ]
}
