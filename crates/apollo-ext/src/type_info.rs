//! Schema-aware traversal of executable documents.
//!
//! [`walk_typed`] walks operations and fragment definitions while keeping a
//! [`TypeInfo`] in sync with the position in the document: the composite type
//! the current selection set is on, the definition of the field being visited
//! and the definition of the argument being visited. Lookups that fail (unknown
//! types, fields or directives) bind `None` and the walk carries on, so invalid
//! documents can still be inspected.
//!
//! Fragment spreads are reported but not followed. A document that should be
//! inspected together with its fragments must contain their definitions.

use apollo_compiler::ast::{self, FieldDefinition, InputValueDefinition};
use apollo_compiler::schema::Component;
use apollo_compiler::{Name, Node, Schema};

/// Type bindings at the current point of a [`walk_typed`] traversal.
#[derive(Debug)]
pub struct TypeInfo<'s> {
    schema: &'s Schema,
    parent_types: Vec<Option<ast::NamedType>>,
    field_defs: Vec<Option<&'s Component<FieldDefinition>>>,
    argument: Option<&'s Node<InputValueDefinition>>,
}

impl<'s> TypeInfo<'s> {
    #[must_use]
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            parent_types: Vec::new(),
            field_defs: Vec::new(),
            argument: None,
        }
    }

    /// The composite type whose fields are being selected.
    #[must_use]
    pub fn parent_type(&self) -> Option<&ast::NamedType> {
        self.parent_types.last().and_then(Option::as_ref)
    }

    /// The definition of the innermost field being visited.
    #[must_use]
    pub fn field_def(&self) -> Option<&'s Component<FieldDefinition>> {
        self.field_defs.last().copied().flatten()
    }

    /// The definition of the argument being visited.
    #[must_use]
    pub fn argument(&self) -> Option<&'s Node<InputValueDefinition>> {
        self.argument
    }

    /// The operation type `type_name` is the root of, if any.
    #[must_use]
    pub fn root_operation_kind(&self, type_name: &str) -> Option<ast::OperationType> {
        [
            ast::OperationType::Query,
            ast::OperationType::Mutation,
            ast::OperationType::Subscription,
        ]
        .into_iter()
        .find(|kind| {
            self.schema
                .root_operation(*kind)
                .is_some_and(|root| root.as_str() == type_name)
        })
    }

    #[must_use]
    pub fn is_root_type(&self, type_name: &str) -> bool {
        self.root_operation_kind(type_name).is_some()
    }

    fn known_type(&self, name: &Name) -> Option<ast::NamedType> {
        self.schema
            .types
            .contains_key(name.as_str())
            .then(|| name.clone())
    }
}

/// Callbacks for [`walk_typed`]. Each hook sees the bindings for its node.
#[allow(unused_variables)]
pub trait TypedVisitor<'s> {
    /// Called with the parent type and field definition bound.
    fn enter_field(&mut self, info: &TypeInfo<'s>, field: &ast::Field) {}

    /// Called for field and directive arguments with the argument definition bound.
    fn enter_argument(&mut self, info: &TypeInfo<'s>, argument: &ast::Argument) {}

    fn visit_fragment_spread(&mut self, info: &TypeInfo<'s>, spread: &ast::FragmentSpread) {}
}

/// Walk every operation and fragment definition of `document` against `schema`.
pub fn walk_typed<'s, V: TypedVisitor<'s>>(
    schema: &'s Schema,
    document: &ast::Document,
    visitor: &mut V,
) {
    let mut info = TypeInfo::new(schema);

    for definition in &document.definitions {
        match definition {
            ast::Definition::OperationDefinition(op) => {
                let root = schema.root_operation(op.operation_type).cloned();
                info.parent_types.push(root);
                for var_def in &op.variables {
                    walk_directives(&mut info, visitor, &var_def.directives);
                }
                walk_directives(&mut info, visitor, &op.directives);
                walk_selection_set(&mut info, visitor, &op.selection_set);
                info.parent_types.pop();
            }
            ast::Definition::FragmentDefinition(frag) => {
                let parent = info.known_type(&frag.type_condition);
                info.parent_types.push(parent);
                walk_directives(&mut info, visitor, &frag.directives);
                walk_selection_set(&mut info, visitor, &frag.selection_set);
                info.parent_types.pop();
            }
            _ => {}
        }
    }
}

fn walk_selection_set<'s, V: TypedVisitor<'s>>(
    info: &mut TypeInfo<'s>,
    visitor: &mut V,
    selections: &[ast::Selection],
) {
    for selection in selections {
        match selection {
            ast::Selection::Field(field) => walk_field(info, visitor, field),
            ast::Selection::FragmentSpread(spread) => {
                visitor.visit_fragment_spread(info, spread);
                walk_directives(info, visitor, &spread.directives);
            }
            ast::Selection::InlineFragment(inline) => {
                let parent = match &inline.type_condition {
                    Some(condition) => info.known_type(condition),
                    None => info.parent_type().cloned(),
                };
                info.parent_types.push(parent);
                walk_directives(info, visitor, &inline.directives);
                walk_selection_set(info, visitor, &inline.selection_set);
                info.parent_types.pop();
            }
        }
    }
}

fn walk_field<'s, V: TypedVisitor<'s>>(
    info: &mut TypeInfo<'s>,
    visitor: &mut V,
    field: &ast::Field,
) {
    let schema = info.schema;
    let field_def = info
        .parent_type()
        .and_then(|parent| schema.type_field(parent.as_str(), field.name.as_str()).ok());

    info.field_defs.push(field_def);
    visitor.enter_field(info, field);

    let argument_defs = field_def.map(|def| def.arguments.as_slice());
    walk_arguments(info, visitor, &field.arguments, argument_defs);
    walk_directives(info, visitor, &field.directives);

    let child_type = field_def.and_then(|def| info.known_type(def.ty.inner_named_type()));
    info.parent_types.push(child_type);
    walk_selection_set(info, visitor, &field.selection_set);
    info.parent_types.pop();

    info.field_defs.pop();
}

fn walk_directives<'s, V: TypedVisitor<'s>>(
    info: &mut TypeInfo<'s>,
    visitor: &mut V,
    directives: &ast::DirectiveList,
) {
    let schema = info.schema;
    for directive in directives.iter() {
        let argument_defs = schema
            .directive_definitions
            .get(directive.name.as_str())
            .map(|def| def.arguments.as_slice());
        walk_arguments(info, visitor, &directive.arguments, argument_defs);
    }
}

fn walk_arguments<'s, V: TypedVisitor<'s>>(
    info: &mut TypeInfo<'s>,
    visitor: &mut V,
    arguments: &[Node<ast::Argument>],
    definitions: Option<&'s [Node<InputValueDefinition>]>,
) {
    for argument in arguments {
        info.argument = definitions
            .and_then(|defs| defs.iter().find(|def| def.name == argument.name));
        visitor.enter_argument(info, argument);
        info.argument = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
directive @tag(name: String, legacy: Boolean @deprecated) on FIELD

type Query {
    user(id: ID, old: String): User
    node: Node
}

interface Node {
    id: ID!
}

type User implements Node {
    id: ID!
    name: String
    friends: [User!]
}
"#;

    fn schema() -> Schema {
        Schema::parse_and_validate(SCHEMA, "schema.graphql")
            .unwrap()
            .into_inner()
    }

    fn parse(source: &str) -> ast::Document {
        ast::Document::parse(source, "query.graphql").unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    fn describe(info: &TypeInfo<'_>) -> String {
        info.parent_type()
            .map_or_else(|| "?".to_string(), ToString::to_string)
    }

    impl<'s> TypedVisitor<'s> for Recorder {
        fn enter_field(&mut self, info: &TypeInfo<'s>, field: &ast::Field) {
            let known = if info.field_def().is_some() { "" } else { " (unknown)" };
            self.events
                .push(format!("field {}.{}{known}", describe(info), field.name));
        }

        fn enter_argument(&mut self, info: &TypeInfo<'s>, argument: &ast::Argument) {
            let owner = info
                .field_def()
                .map(|def| def.name.to_string())
                .unwrap_or_default();
            let known = if info.argument().is_some() { "" } else { " (unknown)" };
            self.events
                .push(format!("argument {owner}({}){known}", argument.name));
        }

        fn visit_fragment_spread(&mut self, info: &TypeInfo<'s>, spread: &ast::FragmentSpread) {
            self.events
                .push(format!("spread {} on {}", spread.fragment_name, describe(info)));
        }
    }

    fn record(source: &str) -> Vec<String> {
        let schema = schema();
        let mut recorder = Recorder::default();
        walk_typed(&schema, &parse(source), &mut recorder);
        recorder.events
    }

    #[test]
    fn test_fields_bind_parent_and_definition() {
        let events = record("query { user(id: 1) { name friends { id } } }");
        assert_eq!(
            events,
            vec![
                "field Query.user",
                "argument user(id)",
                "field User.name",
                "field User.friends",
                "field User.id",
            ]
        );
    }

    #[test]
    fn test_directive_arguments_bind_directive_definition() {
        let events = record("query { user @tag(name: \"a\", legacy: true) { id } }");
        assert_eq!(
            events,
            vec![
                "field Query.user",
                "argument user(name)",
                "argument user(legacy)",
                "field User.id",
            ]
        );
    }

    #[test]
    fn test_fragments_bind_type_condition() {
        let events = record(
            r"
query { node { ... on User { name } ...NodeFields } }
fragment NodeFields on Node { id }
",
        );
        assert_eq!(
            events,
            vec![
                "field Query.node",
                "field User.name",
                "spread NodeFields on Node",
                "field Node.id",
            ]
        );
    }

    #[test]
    fn test_unknown_names_bind_nothing_and_continue() {
        let events = record(
            r"
query { missing(flag: true) { name } user(nope: 1) { id } }
fragment Ghost on Phantom { id }
",
        );
        assert_eq!(
            events,
            vec![
                "field Query.missing (unknown)",
                "argument (flag) (unknown)",
                "field ?.name (unknown)",
                "field Query.user",
                "argument user(nope) (unknown)",
                "field User.id",
                "field ?.id (unknown)",
            ]
        );
    }

    #[test]
    fn test_root_operation_kind() {
        let schema = Schema::parse_and_validate(
            "schema { query: RootQuery mutation: RootMutation } type RootQuery { a: Int } type RootMutation { b: Int }",
            "schema.graphql",
        )
        .unwrap();
        let info = TypeInfo::new(&schema);

        assert_eq!(
            info.root_operation_kind("RootMutation"),
            Some(ast::OperationType::Mutation)
        );
        assert!(info.is_root_type("RootQuery"));
        assert!(!info.is_root_type("Query"));
    }
}
