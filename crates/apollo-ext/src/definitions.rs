//! Definition filtering utilities for GraphQL documents.
//!
//! # Example
//!
//! ```
//! use apollo_compiler::ast;
//! use graphql_apollo_ext::DocumentExt;
//!
//! let source = r"
//!     query GetUser { user { id } }
//!     mutation UpdateUser { updateUser { id } }
//!     fragment UserFields on User { name }
//! ";
//! let document = ast::Document::parse(source, "ops.graphql").unwrap();
//!
//! assert_eq!(document.operations().count(), 2);
//! assert_eq!(document.fragments().count(), 1);
//! ```

use apollo_compiler::ast;
use apollo_compiler::Node;

/// Extension trait for convenient access to executable definitions.
pub trait DocumentExt {
    /// Iterate over all operation definitions in the document.
    fn operations(&self) -> impl Iterator<Item = &Node<ast::OperationDefinition>>;

    /// Iterate over all fragment definitions in the document.
    fn fragments(&self) -> impl Iterator<Item = &Node<ast::FragmentDefinition>>;

    /// Whether the document defines at least one operation.
    fn has_operations(&self) -> bool {
        self.operations().next().is_some()
    }
}

impl DocumentExt for ast::Document {
    fn operations(&self) -> impl Iterator<Item = &Node<ast::OperationDefinition>> {
        self.definitions.iter().filter_map(|def| {
            if let ast::Definition::OperationDefinition(op) = def {
                Some(op)
            } else {
                None
            }
        })
    }

    fn fragments(&self) -> impl Iterator<Item = &Node<ast::FragmentDefinition>> {
        self.definitions.iter().filter_map(|def| {
            if let ast::Definition::FragmentDefinition(frag) = def {
                Some(frag)
            } else {
                None
            }
        })
    }
}
