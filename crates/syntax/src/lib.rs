//! # Document loading
//!
//! Turns a glob of operation files and a schema path into parsed
//! `apollo-compiler` documents and a validated schema.
//!
//! ```rust,ignore
//! let schema = graphql_syntax::load_schema(schema_path).await?;
//! let documents = graphql_syntax::load_documents("src/**/*.graphql", schema_path).await?;
//! for (path, document) in documents.iter() {
//!     process(path, document);
//! }
//! ```
//!
//! Documents are only checked for syntax here. Validation needs the fragments
//! other files define, so it runs after assembly (see `graphql-analysis`).

mod error;
mod loader;
mod parse;

pub use error::{LoadError, Result};
pub use loader::{expand_glob, load_documents, load_schema, DocumentSet};
pub use parse::{format_diagnostics, is_same_file, normalize_path, parse_document, parse_schema};
