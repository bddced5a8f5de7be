use golinter_jsonschema::diagnostic::{Span, TextEdit};
use golinter_jsonschema::error::LintError;
use golinter_jsonschema::fix::{apply_edits, fix_file};

fn edit(start: usize, end: usize, new_text: &str) -> TextEdit {
    TextEdit {
        span: Span::new(start, end),
        new_text: new_text.to_string(),
    }
}

#[test]
fn no_edits_returns_source() {
    assert_eq!(apply_edits("unchanged", &[]).unwrap(), "unchanged");
}

#[test]
fn edits_apply_in_any_order() {
    let edits = [edit(6, 7, "Z"), edit(0, 1, "A")];
    assert_eq!(apply_edits("a b c d", &edits).unwrap(), "A b c Z");
}

#[test]
fn insertions_and_deletions() {
    let edits = [edit(1, 1, "\\"), edit(3, 5, "")];
    assert_eq!(apply_edits("a,bcd", &edits).unwrap(), "a\\,b");
}

#[test]
fn identical_edits_apply_once() {
    let edits = [edit(1, 2, "\\,"), edit(1, 2, "\\,")];
    assert_eq!(apply_edits("a,b", &edits).unwrap(), "a\\,b");
}

#[test]
fn overlapping_edits_are_rejected() {
    let edits = [edit(0, 3, "x"), edit(2, 4, "y")];
    let err = apply_edits("abcdef", &edits).unwrap_err();
    assert!(matches!(err, LintError::OverlappingEdits(2)), "{err}");
}

#[test]
fn out_of_bounds_edit_is_rejected() {
    let err = apply_edits("abc", &[edit(2, 10, "x")]).unwrap_err();
    assert!(matches!(
        err,
        LintError::EditOutOfBounds { start: 2, end: 10, len: 3 }
    ));
}

#[test]
fn edit_inside_multibyte_char_is_rejected() {
    let err = apply_edits("é", &[edit(1, 2, "e")]).unwrap_err();
    assert!(matches!(err, LintError::EditOutOfBounds { .. }));
}

#[test]
fn fix_file_rewrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("types.go");
    std::fs::write(&path, "a, b").unwrap();

    fix_file(&path, &[edit(1, 1, "\\")]).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\\, b");
}

#[test]
fn fix_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.go");

    let err = fix_file(&path, &[]).unwrap_err();
    assert!(matches!(err, LintError::Read { .. }));
    assert!(err.to_string().contains("missing.go"));
}

#[test]
fn failed_edit_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("types.go");
    std::fs::write(&path, "abc").unwrap();

    assert!(fix_file(&path, &[edit(0, 9, "")]).is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "abc");
}
