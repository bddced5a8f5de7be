//! # golinter-jsonschema
//!
//! Lint for Go struct tags that carry JSON Schema metadata:
//!
//! ```go
//! type Release struct {
//!     Date string `json:"date" jsonschema:"title=Date,description=The exact date, when deprecated."`
//! }
//! ```
//!
//! Two things are checked in every `jsonschema:"..."` sub-tag: that each key
//! is a JSON Schema keyword, and that commas inside values are escaped as
//! `\,`. Unescaped commas come with a suggested fix that escapes them.
//!
//! ## Quick start
//!
//! ```rust
//! use golinter_jsonschema::rules::nocommas::{NoCommas, UNESCAPED_COMMA};
//!
//! let src = "package p\n\ntype T struct {\n\tD string `jsonschema:\"description=a, b\"`\n}\n";
//! let checked = NoCommas::default().check_source(src);
//!
//! assert_eq!(checked.diagnostics.len(), 1);
//! assert_eq!(checked.diagnostics[0].rule_id, UNESCAPED_COMMA);
//! assert_eq!(
//!     checked.diagnostics[0].fixes[0].edits[0].new_text,
//!     "jsonschema:\"description=a\\, b\""
//! );
//! ```
//!
//! ## Architecture
//!
//! 1. **[`tag`]**: find the `jsonschema` sub-tag in a raw tag string.
//! 2. **[`decode`]**: split its payload into key/value pairs, re-joining
//!    values that contained commas.
//! 3. **[`rules`]**: the [`rules::nocommas::NoCommas`] rule engine, run over
//!    the fields found by [`syntax`].
//! 4. **[`lint`]**: walk a directory, lint files in parallel, apply
//!    suppressions and, on request, [`fix`]es.
//! 5. **[`output`]**: render a [`finding::LintReport`] as text, JSON, or [SARIF].
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod config;
pub mod decode;
pub mod diagnostic;
pub mod error;
pub mod finding;
pub mod fix;
pub mod keys;
pub mod lint;
pub mod output;
pub mod rules;
pub mod syntax;
pub mod tag;
