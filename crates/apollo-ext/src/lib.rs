//! Extensions for `apollo-compiler`: visitor pattern, definition helpers and
//! schema-aware traversal.
//!
//! This crate provides:
//! - **Visitor pattern** for traversing executable AST nodes
//! - **Definition iterators** for filtering document definitions
//! - **Typed traversal** binding parent types, field and argument definitions
//!
//! # Example
//!
//! ```
//! use apollo_compiler::ast;
//! use graphql_apollo_ext::{walk_document, AstVisitor};
//!
//! struct FragmentCollector {
//!     fragments: Vec<String>,
//! }
//!
//! impl AstVisitor for FragmentCollector {
//!     fn visit_fragment_spread(&mut self, spread: &ast::FragmentSpread) {
//!         self.fragments.push(spread.fragment_name.to_string());
//!     }
//! }
//!
//! let document = ast::Document::parse("query { ...UserFields }", "query.graphql").unwrap();
//! let mut collector = FragmentCollector { fragments: vec![] };
//! walk_document(&mut collector, &document);
//! assert_eq!(collector.fragments, vec!["UserFields"]);
//! ```

mod definitions;
mod type_info;
mod visitor;

pub use definitions::*;
pub use type_info::*;
pub use visitor::*;
