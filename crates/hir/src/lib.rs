// GraphQL HIR (High-level Intermediate Representation)
// This crate turns parsed documents into the fragment knowledge the rest of the
// pipeline needs: which fragments exist, where they live, and which fragments
// each definition spreads.

mod closure;
mod fragments;
mod spreads;

pub use closure::{resolve_closure, resolve_closure_with, FragmentClosure};
pub use fragments::{DuplicateFragment, FragmentEntry, FragmentIndex};
pub use spreads::{document_fragment_spreads, fragment_spreads};

/// Ordered set of fragment names, in discovery order.
pub type FragmentNameSet = indexmap::IndexSet<apollo_compiler::Name>;
