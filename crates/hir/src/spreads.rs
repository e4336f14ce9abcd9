use crate::FragmentNameSet;
use apollo_compiler::ast;
use graphql_apollo_ext::{walk_document, walk_selection_set, AstVisitor};

#[derive(Default)]
struct SpreadCollector {
    names: FragmentNameSet,
}

impl AstVisitor for SpreadCollector {
    fn visit_fragment_spread(&mut self, spread: &ast::FragmentSpread) {
        self.names.insert(spread.fragment_name.clone());
    }
}

/// Names of the fragments spread directly inside `selection_set`, including
/// spreads nested in fields and inline fragments.
#[must_use]
pub fn fragment_spreads(selection_set: &[ast::Selection]) -> FragmentNameSet {
    let mut collector = SpreadCollector::default();
    walk_selection_set(&mut collector, selection_set);
    collector.names
}

/// Names of the fragments spread anywhere in `document`: its operations and
/// the fragments it defines itself.
#[must_use]
pub fn document_fragment_spreads(document: &ast::Document) -> FragmentNameSet {
    let mut collector = SpreadCollector::default();
    walk_document(&mut collector, document);
    collector.names
}
