use golinter_jsonschema::diagnostic::Span;
use golinter_jsonschema::syntax::{field_sites, LineIndex, TagLiteral, TaggedField};

// ---------------------------------------------------------------------------
// field_sites
// ---------------------------------------------------------------------------

const SOURCE: &str = "package p

type A struct {
	X, Y int `json:\"xy\"`
	Z    string
	W    string \"json:\\\"w\\\"\"
	Nested struct {
		Inner bool `jsonschema:\"title=Inner\"`
	}
}
";

#[test]
fn finds_every_field_declaration() {
    let fields = field_sites(SOURCE);
    assert_eq!(fields.len(), 5, "{fields:?}");
}

#[test]
fn tag_span_points_into_source() {
    for field in field_sites(SOURCE) {
        if let Some(tag) = field.tag() {
            let span = tag.span();
            assert_eq!(&SOURCE[span.start..span.end], tag.raw());
        }
    }
}

#[test]
fn untagged_field_has_no_tag() {
    let fields = field_sites(SOURCE);
    assert!(fields[1].tag().is_none());
}

#[test]
fn interpreted_string_tags_keep_their_quotes() {
    let fields = field_sites(SOURCE);
    let tag = fields[2].tag().unwrap();
    assert_eq!(tag.raw(), "\"json:\\\"w\\\"\"");
    assert_eq!(tag.body(), tag.raw());
    assert_eq!(tag.body_span(), tag.span());
}

#[test]
fn nested_fields_follow_their_parent() {
    let fields = field_sites(SOURCE);
    assert!(fields[3].tag().is_none());
    assert_eq!(fields[4].tag().unwrap().body(), "jsonschema:\"title=Inner\"");
    assert!(fields[3].span().start < fields[4].span().start);
    assert!(fields[4].span().end <= fields[3].span().end);
}

#[test]
fn source_without_structs_has_no_fields() {
    assert!(field_sites("package p\n\nvar x = 1\n").is_empty());
    assert!(field_sites("").is_empty());
}

#[test]
fn interface_methods_are_not_fields() {
    let source = "package p\n\ntype I interface {\n\tM() string\n}\n";
    assert!(field_sites(source).is_empty());
}

// ---------------------------------------------------------------------------
// TagLiteral
// ---------------------------------------------------------------------------

#[test]
fn raw_string_body_drops_backticks() {
    let tag = TagLiteral::new("`json:\"a\"`", 10);
    assert_eq!(tag.span(), Span::new(10, 20));
    assert_eq!(tag.body(), "json:\"a\"");
    assert_eq!(tag.body_span(), Span::new(11, 19));
}

#[test]
fn interpreted_string_body_is_left_as_written() {
    let tag = TagLiteral::new("\"x\"", 4);
    assert_eq!(tag.body(), "\"x\"");
    assert_eq!(tag.body_span(), Span::new(4, 7));
}

#[test]
fn undelimited_literal_is_its_own_body() {
    let tag = TagLiteral::new("json:\"a\"", 3);
    assert_eq!(tag.body(), "json:\"a\"");
    assert_eq!(tag.body_span(), tag.span());
}

#[test]
fn lone_backtick_is_not_treated_as_delimited() {
    let tag = TagLiteral::new("`", 0);
    assert_eq!(tag.body(), "`");
}

// ---------------------------------------------------------------------------
// LineIndex
// ---------------------------------------------------------------------------

#[test]
fn line_col_is_one_based() {
    let index = LineIndex::new("ab\ncd\n");
    assert_eq!(index.line_col(0), (1, 1));
    assert_eq!(index.line_col(1), (1, 2));
    assert_eq!(index.line_col(3), (2, 1));
    assert_eq!(index.line_col(4), (2, 2));
}

#[test]
fn line_col_counts_chars_not_bytes() {
    let source = "// é\nx";
    let index = LineIndex::new(source);
    let x = source.find('x').unwrap();
    assert_eq!(index.line_col(x), (2, 1));
    // 'é' is two bytes wide but one column.
    assert_eq!(index.line_col(source.find('\n').unwrap()), (1, 5));
}

#[test]
fn line_col_clamps_past_end() {
    let index = LineIndex::new("ab");
    assert_eq!(index.line_col(99), (1, 3));
}

#[test]
fn rest_of_line_stops_at_newline() {
    let source = "a `t` //nolint\nb";
    let index = LineIndex::new(source);
    assert_eq!(index.rest_of_line(5), " //nolint");
    assert_eq!(index.rest_of_line(source.len()), "");
}
