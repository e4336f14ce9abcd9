//! Visitor pattern for `apollo-compiler` AST traversal.
//!
//! This module provides a visitor trait for walking the executable parts of a
//! GraphQL document (operations and fragments) with custom logic at each node
//! type. Default implementations do nothing, so you only need to override the
//! methods you care about. Type-system definitions are skipped.
//!
//! # Example
//!
//! ```
//! use apollo_compiler::ast;
//! use graphql_apollo_ext::{walk_document, AstVisitor};
//!
//! struct FieldCounter(usize);
//!
//! impl AstVisitor for FieldCounter {
//!     fn enter_field(&mut self, _field: &ast::Field) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let document = ast::Document::parse("query { user { name email } }", "query.graphql").unwrap();
//! let mut counter = FieldCounter(0);
//! walk_document(&mut counter, &document);
//! assert_eq!(counter.0, 3); // user, name, email
//! ```

use apollo_compiler::ast;

/// A visitor for traversing executable AST nodes.
///
/// Methods prefixed with `enter_` are called before visiting children,
/// and `exit_` methods are called after. Simple `visit_` methods are called
/// once without separate enter/exit phases.
#[allow(unused_variables)]
pub trait AstVisitor {
    // =========================================================================
    // Definition visitors
    // =========================================================================

    /// Called when entering an operation definition
    fn enter_operation(&mut self, op: &ast::OperationDefinition) {}

    /// Called when exiting an operation definition
    fn exit_operation(&mut self, op: &ast::OperationDefinition) {}

    /// Called when entering a fragment definition
    fn enter_fragment_definition(&mut self, frag: &ast::FragmentDefinition) {}

    /// Called when exiting a fragment definition
    fn exit_fragment_definition(&mut self, frag: &ast::FragmentDefinition) {}

    // =========================================================================
    // Selection visitors
    // =========================================================================

    /// Called for each field, before its arguments, directives and sub-selections
    fn enter_field(&mut self, field: &ast::Field) {}

    /// Called after a field's sub-selections have been walked
    fn exit_field(&mut self, field: &ast::Field) {}

    /// Called for each fragment spread (`...FragmentName`)
    fn visit_fragment_spread(&mut self, spread: &ast::FragmentSpread) {}

    /// Called when entering an inline fragment (`... on Type { }`)
    fn enter_inline_fragment(&mut self, inline: &ast::InlineFragment) {}

    /// Called when exiting an inline fragment
    fn exit_inline_fragment(&mut self, inline: &ast::InlineFragment) {}

    // =========================================================================
    // Directive and argument visitors
    // =========================================================================

    /// Called for each directive (`@directive`)
    fn visit_directive(&mut self, directive: &ast::Directive) {}

    /// Called for each argument in field/directive arguments
    fn visit_argument(&mut self, argument: &ast::Argument) {}
}

// =============================================================================
// Walk functions - these drive the traversal
// =============================================================================

/// Walk every executable definition of a document.
pub fn walk_document<V: AstVisitor>(visitor: &mut V, document: &ast::Document) {
    for definition in &document.definitions {
        walk_definition(visitor, definition);
    }
}

/// Walk a single definition. Type-system definitions are ignored.
pub fn walk_definition<V: AstVisitor>(visitor: &mut V, definition: &ast::Definition) {
    match definition {
        ast::Definition::OperationDefinition(op) => walk_operation(visitor, op),
        ast::Definition::FragmentDefinition(frag) => walk_fragment_definition(visitor, frag),
        _ => {}
    }
}

/// Walk an operation definition.
pub fn walk_operation<V: AstVisitor>(visitor: &mut V, op: &ast::OperationDefinition) {
    visitor.enter_operation(op);

    for var_def in &op.variables {
        walk_directives(visitor, &var_def.directives);
    }

    walk_directives(visitor, &op.directives);
    walk_selection_set(visitor, &op.selection_set);

    visitor.exit_operation(op);
}

/// Walk a fragment definition.
pub fn walk_fragment_definition<V: AstVisitor>(visitor: &mut V, frag: &ast::FragmentDefinition) {
    visitor.enter_fragment_definition(frag);

    walk_directives(visitor, &frag.directives);
    walk_selection_set(visitor, &frag.selection_set);

    visitor.exit_fragment_definition(frag);
}

/// Walk a selection set.
pub fn walk_selection_set<V: AstVisitor>(visitor: &mut V, selections: &[ast::Selection]) {
    for selection in selections {
        match selection {
            ast::Selection::Field(field) => walk_field(visitor, field),
            ast::Selection::FragmentSpread(spread) => {
                visitor.visit_fragment_spread(spread);
                walk_directives(visitor, &spread.directives);
            }
            ast::Selection::InlineFragment(inline) => {
                visitor.enter_inline_fragment(inline);
                walk_directives(visitor, &inline.directives);
                walk_selection_set(visitor, &inline.selection_set);
                visitor.exit_inline_fragment(inline);
            }
        }
    }
}

/// Walk a field selection.
pub fn walk_field<V: AstVisitor>(visitor: &mut V, field: &ast::Field) {
    visitor.enter_field(field);

    walk_arguments(visitor, &field.arguments);
    walk_directives(visitor, &field.directives);
    walk_selection_set(visitor, &field.selection_set);

    visitor.exit_field(field);
}

/// Walk arguments.
pub fn walk_arguments<V: AstVisitor>(
    visitor: &mut V,
    arguments: &[apollo_compiler::Node<ast::Argument>],
) {
    for argument in arguments {
        visitor.visit_argument(argument);
    }
}

/// Walk directives.
pub fn walk_directives<V: AstVisitor>(visitor: &mut V, directives: &ast::DirectiveList) {
    for directive in directives.iter() {
        visitor.visit_directive(directive);
        walk_arguments(visitor, &directive.arguments);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> ast::Document {
        ast::Document::parse(source, "test.graphql").unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl AstVisitor for Recorder {
        fn enter_operation(&mut self, op: &ast::OperationDefinition) {
            let name = op.name.as_ref().map_or("<anonymous>", |name| name.as_str());
            self.events.push(format!("operation {name}"));
        }

        fn enter_fragment_definition(&mut self, frag: &ast::FragmentDefinition) {
            self.events.push(format!("fragment {}", frag.name));
        }

        fn enter_field(&mut self, field: &ast::Field) {
            self.events.push(format!("field {}", field.name));
        }

        fn visit_fragment_spread(&mut self, spread: &ast::FragmentSpread) {
            self.events.push(format!("spread {}", spread.fragment_name));
        }

        fn visit_directive(&mut self, directive: &ast::Directive) {
            self.events.push(format!("directive {}", directive.name));
        }

        fn visit_argument(&mut self, argument: &ast::Argument) {
            self.events.push(format!("argument {}", argument.name));
        }
    }

    #[test]
    fn test_walk_order() {
        let document = parse(
            r"
query GetUser($id: ID!) @live {
    user(id: $id) {
        ...UserFields
        ... on User @include(if: true) { name }
    }
}

fragment UserFields on User {
    id
}
",
        );

        let mut recorder = Recorder::default();
        walk_document(&mut recorder, &document);

        assert_eq!(
            recorder.events,
            vec![
                "operation GetUser",
                "directive live",
                "field user",
                "argument id",
                "spread UserFields",
                "directive include",
                "argument if",
                "field name",
                "fragment UserFields",
                "field id",
            ]
        );
    }

    #[test]
    fn test_walk_skips_type_system_definitions() {
        let document = parse("type User { id: ID! } query { user { id } }");

        let mut recorder = Recorder::default();
        walk_document(&mut recorder, &document);

        assert_eq!(
            recorder.events,
            vec!["operation <anonymous>", "field user", "field id"]
        );
    }
}
