//! Lint rule implementations
//!
//! Each rule lives in its own file and walks assembled documents with
//! `graphql_apollo_ext::walk_typed`.

mod no_deprecated;

pub use no_deprecated::{scan_document, NoDeprecatedRule};
