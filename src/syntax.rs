//! Go syntax access: struct field declarations and their tag literals.
//!
//! Parsing goes through [ast-grep] with the tree-sitter Go grammar. The rule
//! engine never sees ast-grep types; it works against the [`TaggedField`]
//! capability, which [`FieldSite`] implements.
//!
//! [ast-grep]: https://ast-grep.github.io/

use ast_grep_core::matcher::KindMatcher;
use ast_grep_language::{LanguageExt, SupportLang};

use crate::diagnostic::Span;

const FIELD_DECLARATION: &str = "field_declaration";

/// A field declaration as seen by the rule engine.
pub trait TaggedField {
    /// Byte range of the whole declaration.
    fn span(&self) -> Span;

    /// The tag literal attached to the field, if any.
    fn tag(&self) -> Option<&TagLiteral>;
}

/// A tag literal exactly as written, delimiters included.
///
/// Only raw string tags (`` `...` ``) are unwrapped. An interpreted string
/// tag keeps its quotes and escapes in [`body`](TagLiteral::body), so its
/// sub-tags are never found and such fields go unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLiteral {
    raw: String,
    span: Span,
}

impl TagLiteral {
    /// Creates a literal whose first byte sits at `start` in the source.
    pub fn new(raw: impl Into<String>, start: usize) -> Self {
        let raw = raw.into();
        let span = Span::new(start, start + raw.len());
        TagLiteral { raw, span }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// The literal without its enclosing backticks.
    pub fn body(&self) -> &str {
        let d = self.delimiter_len();
        &self.raw[d..self.raw.len() - d]
    }

    /// Byte range of [`body`](TagLiteral::body) in the source.
    pub fn body_span(&self) -> Span {
        let d = self.delimiter_len();
        Span::new(self.span.start + d, self.span.end - d)
    }

    fn delimiter_len(&self) -> usize {
        if self.raw.len() >= 2 && self.raw.starts_with('`') && self.raw.ends_with('`') {
            1
        } else {
            0
        }
    }
}

/// A struct field located in a Go source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSite {
    pub span: Span,
    pub tag: Option<TagLiteral>,
}

impl TaggedField for FieldSite {
    fn span(&self) -> Span {
        self.span
    }

    fn tag(&self) -> Option<&TagLiteral> {
        self.tag.as_ref()
    }
}

/// Collects every struct field of a Go source file in document order.
///
/// Fields of nested anonymous structs are included and follow their parent.
/// tree-sitter recovers from syntax errors, so a malformed file still yields
/// the fields it could parse.
///
/// ```
/// use golinter_jsonschema::syntax::{field_sites, TaggedField};
///
/// let src = "package p\n\ntype T struct {\n\tA int `json:\"a\"`\n\tB int\n}\n";
/// let fields = field_sites(src);
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields[0].tag().unwrap().body(), "json:\"a\"");
/// assert!(fields[1].tag().is_none());
/// ```
pub fn field_sites(source: &str) -> Vec<FieldSite> {
    let root = SupportLang::Go.ast_grep(source);
    let matcher = KindMatcher::new(FIELD_DECLARATION, SupportLang::Go);

    root.root()
        .find_all(matcher)
        .map(|field| {
            let tag = field
                .field("tag")
                .map(|t| TagLiteral::new(t.text().to_string(), t.range().start));
            FieldSite {
                span: field.range().into(),
                tag,
            }
        })
        .collect()
}

/// Byte offset to line/column conversion for one source text.
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        LineIndex {
            source,
            line_starts,
        }
    }

    /// Returns the 1-based `(line, column)` of `offset`; columns count chars.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&s| s <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self
            .source
            .get(line_start..offset)
            .map(|s| s.chars().count())
            .unwrap_or(offset - line_start);
        (line, column + 1)
    }

    /// Text from `offset` to the end of its line.
    pub fn rest_of_line(&self, offset: usize) -> &'a str {
        let offset = offset.min(self.source.len());
        let rest = self.source.get(offset..).unwrap_or("");
        let end = rest.find('\n').unwrap_or(rest.len());
        rest[..end].trim_end_matches('\r')
    }
}
