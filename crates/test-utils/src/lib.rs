//! # GraphQL Test Utilities
//!
//! Shared test infrastructure for the deprecation linter crates.

// Test utilities are less strict than production code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_raw_string_hashes)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::expect_used)]
//!
//! ## Quick Start
//!
//! ```ignore
//! use graphql_test_utils::fixtures::{deprecations_documents, deprecations_schema};
//!
//! #[test]
//! fn test_scan() {
//!     let schema = deprecations_schema();
//!     let documents = deprecations_documents();
//!     // ... run the pipeline and assert on the notices
//! }
//! ```
//!
//! ## Modules
//!
//! - [`fixtures`] - The shared deprecation schema and its documents
//! - [`project`] - Temporary on-disk projects for loader and CLI tests
//! - [`assertions`] - Formatting helpers for insta snapshots

pub mod assertions;
pub mod fixtures;
pub mod project;

pub use project::{TestProject, TestProjectBuilder};

// Re-export insta for snapshot testing
pub use insta;

pub use assertions::format_notices;
