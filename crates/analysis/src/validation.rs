use crate::AssembledDocument;
use apollo_compiler::validation::Valid;
use apollo_compiler::Schema;
use std::fmt;

/// One schema validation error that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessage {
    pub message: String,
    /// 1-based `(line, column)` of the error, when known.
    pub location: Option<(usize, usize)>,
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some((line, column)) => write!(f, "{line}:{column}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Whether `message` reports a directive the schema does not define.
///
/// Documents commonly carry client-only directives the server schema never
/// declares; those errors are dropped.
#[must_use]
pub fn is_unknown_directive_error(message: &str) -> bool {
    message.starts_with("Unknown directive") || message.starts_with("cannot find directive")
}

/// Validate an assembled document against `schema`.
///
/// Validation errors never stop the run: they are returned for reporting and
/// the document is still scanned.
#[tracing::instrument(skip_all, fields(path = %assembled.path.display()))]
pub fn validate_document(
    schema: &Valid<Schema>,
    assembled: &AssembledDocument,
) -> Vec<ValidationMessage> {
    let Err(with_errors) = assembled.document.to_executable_validate(schema) else {
        return Vec::new();
    };

    let messages: Vec<_> = with_errors
        .errors
        .iter()
        .filter_map(|diagnostic| {
            let message = diagnostic.error.to_string();
            if is_unknown_directive_error(&message) {
                tracing::trace!(%message, "Ignoring unknown directive");
                return None;
            }
            let location = diagnostic
                .line_column_range()
                .map(|range| (range.start.line, range.start.column));
            Some(ValidationMessage { message, location })
        })
        .collect();

    for message in &messages {
        tracing::warn!(message = %message, "Validation error");
    }
    messages
}
