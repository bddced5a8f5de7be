//! JSON Schema keywords accepted inside a `jsonschema` tag.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Keywords in declaration order, as listed by `list-rules` and `explain`.
pub const ALLOWED_KEYS: &[&str] = &[
    "$id",
    "$schema",
    "$ref",
    "$comment",
    "title",
    "description",
    "default",
    "readOnly",
    "examples",
    "multipleOf",
    "maximum",
    "exclusiveMaximum",
    "minimum",
    "exclusiveMinimum",
    "maxLength",
    "minLength",
    "pattern",
    "additionalItems",
    "items",
    "maxItems",
    "minItems",
    "uniqueItems",
    "contains",
    "maxProperties",
    "minProperties",
    "required",
    "additionalProperties",
    "definitions",
    "properties",
    "patternProperties",
    "dependencies",
    "propertyNames",
    "const",
    "enum",
    "type",
    "format",
    "contentMediaType",
    "contentEncoding",
    "if",
    "then",
    "else",
    "allOf",
    "anyOf",
    "oneOf",
    "not",
];

static ALLOWED_KEY_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ALLOWED_KEYS.iter().copied().collect());

/// Returns `true` if `key` is an accepted JSON Schema keyword.
///
/// Matching is exact and case-sensitive.
///
/// ```
/// use golinter_jsonschema::keys::is_allowed;
///
/// assert!(is_allowed("description"));
/// assert!(!is_allowed("Description"));
/// ```
pub fn is_allowed(key: &str) -> bool {
    ALLOWED_KEY_SET.contains(key)
}
