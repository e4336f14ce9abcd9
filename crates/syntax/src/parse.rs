use crate::{LoadError, Result};
use apollo_compiler::ast;
use apollo_compiler::validation::{DiagnosticList, Valid};
use apollo_compiler::Schema;
use std::path::{Component, Path, PathBuf};

/// Parse an executable document.
///
/// Only syntax is checked here; schema validation happens once the document has
/// been assembled with its fragments.
pub fn parse_document(source: &str, path: &Path) -> Result<ast::Document> {
    ast::Document::parse(source, path).map_err(|with_errors| LoadError::Parse {
        path: path.to_path_buf(),
        message: format_diagnostics(&with_errors.errors),
    })
}

/// Build and validate the schema the documents are checked against.
pub fn parse_schema(source: &str, path: &Path) -> Result<Valid<Schema>> {
    Schema::parse_and_validate(source, path).map_err(|with_errors| LoadError::Schema {
        path: path.to_path_buf(),
        message: format_diagnostics(&with_errors.errors),
    })
}

/// Render apollo-compiler diagnostics one per line, prefixed with `line:column`
/// when the diagnostic has a location.
#[must_use]
pub fn format_diagnostics(errors: &DiagnosticList) -> String {
    errors
        .iter()
        .map(|diagnostic| match diagnostic.line_column_range() {
            Some(range) => format!(
                "  {}:{}: {}",
                range.start.line, range.start.column, diagnostic.error
            ),
            None => format!("  {}", diagnostic.error),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop `.` components so paths produced by different glob spellings compare
/// (and print) the same way.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Whether two paths name the same file.
///
/// Canonical paths are compared when both files exist; otherwise the
/// normalized spellings are.
#[must_use]
pub fn is_same_file(left: &Path, right: &Path) -> bool {
    match (left.canonicalize(), right.canonicalize()) {
        (Ok(left), Ok(right)) => left == right,
        _ => normalize_path(left) == normalize_path(right),
    }
}
