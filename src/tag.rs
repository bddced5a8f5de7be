//! Sub-tag extraction from raw struct tag text.
//!
//! A Go struct tag conventionally holds several named sub-tags:
//!
//! ```text
//! json:"deprecation_date" jsonschema:"title=Deprecation Date,description=..."
//! ```
//!
//! [`extract`] locates one of them by name and returns the text between its
//! quotes. Embedded quotes cannot be escaped: the first `"` after the opening
//! one always ends the payload.

/// Name of the sub-tag carrying JSON Schema metadata.
pub const JSONSCHEMA: &str = "jsonschema";

/// A sub-tag payload located inside a raw tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubTag<'a> {
    /// Text strictly between the sub-tag's quotes.
    pub payload: &'a str,
    /// Byte offset of [`payload`](SubTag::payload) inside the raw tag text.
    pub offset: usize,
}

/// Locates the sub-tag `name` in `raw` and returns its quoted payload.
///
/// Returns `None` when `name:` does not occur, when it is not immediately
/// followed by `"`, or when the closing quote is missing. Only the first
/// occurrence of `name:` is considered.
///
/// # Examples
///
/// ```
/// use golinter_jsonschema::tag::extract;
///
/// let sub = extract(r#"json:"id" jsonschema:"title=Id""#, "jsonschema").unwrap();
/// assert_eq!(sub.payload, "title=Id");
/// assert_eq!(sub.offset, 22);
///
/// assert!(extract(r#"jsonschema:title=Id"#, "jsonschema").is_none());
/// ```
pub fn extract<'a>(raw: &'a str, name: &str) -> Option<SubTag<'a>> {
    let prefix = format!("{name}:");
    let start = raw.find(&prefix)? + prefix.len();

    let rest = raw[start..].strip_prefix('"')?;
    let end = rest.find('"')?;

    Some(SubTag {
        payload: &rest[..end],
        offset: start + 1,
    })
}

/// Shorthand for [`extract`] when only the payload is needed.
pub fn sub_tag<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    extract(raw, name).map(|t| t.payload)
}
