//! Applying suggested text edits.

use crate::diagnostic::TextEdit;
use crate::error::LintError;
use std::path::Path;

/// Applies `edits` to `source` and returns the rewritten text.
///
/// Edits may be given in any order. Identical duplicate edits are applied
/// once.
///
/// # Errors
///
/// Fails when an edit lies outside `source` or off a char boundary, or
/// when two distinct edits overlap.
///
/// ```
/// use golinter_jsonschema::diagnostic::{Span, TextEdit};
/// use golinter_jsonschema::fix::apply_edits;
///
/// let edits = [TextEdit { span: Span::new(4, 5), new_text: "\\,".into() }];
/// assert_eq!(apply_edits("a=b , c", &edits).unwrap(), "a=b \\, c");
/// ```
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> Result<String, LintError> {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by_key(|e| (e.span.start, e.span.end));
    sorted.dedup();

    let mut out = String::with_capacity(source.len());
    let mut last = 0;
    for edit in sorted {
        let (start, end) = (edit.span.start, edit.span.end);
        if start > end
            || end > source.len()
            || !source.is_char_boundary(start)
            || !source.is_char_boundary(end)
        {
            return Err(LintError::EditOutOfBounds {
                start,
                end,
                len: source.len(),
            });
        }
        if start < last {
            return Err(LintError::OverlappingEdits(start));
        }
        out.push_str(&source[last..start]);
        out.push_str(&edit.new_text);
        last = end;
    }
    out.push_str(&source[last..]);
    Ok(out)
}

/// Rewrites the file at `path` with `edits` applied.
pub fn fix_file(path: &Path, edits: &[TextEdit]) -> Result<(), LintError> {
    let source = std::fs::read_to_string(path).map_err(|source| LintError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let fixed = apply_edits(&source, edits)?;
    std::fs::write(path, fixed).map_err(|source| LintError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), edits = edits.len(), "applied fixes");
    Ok(())
}
