// GraphQL Analysis Layer
// This crate assembles each operation document with the fragments it needs and
// validates the result against the schema.

mod assemble;
mod error;
mod validation;

pub use assemble::{assemble_document, AssembledDocument};
pub use error::{AnalysisError, Result};
pub use validation::{is_unknown_directive_error, validate_document, ValidationMessage};
