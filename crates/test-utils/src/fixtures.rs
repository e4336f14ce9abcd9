//! Shared test fixtures for GraphQL schemas and documents.
//!
//! The `DEPRECATIONS_*` fixtures form a small project: one operation file that
//! reaches two fragments defined in two other files, one of them only through
//! the other. Together they use a deprecated root field, a deprecated argument
//! and two deprecated nested fields, and one of the fragments carries a client
//! directive the schema does not define.
//!
//! For tests where the schema structure is the point of the test, prefer
//! inline fixtures to keep the test self-documenting.

use apollo_compiler::validation::Valid;
use apollo_compiler::Schema;
use graphql_syntax::DocumentSet;

use crate::{TestProject, TestProjectBuilder};

/// Schema with deprecations on a root field, an argument and nested fields.
pub const DEPRECATIONS_SCHEMA: &str = r#"
type Query {
    someQuery: SomeType
    someDeprecatedQuery: String @deprecated(reason: "Use someQuery instead")
    someQueryWithDeprecatedInput(
        input: String @deprecated(reason: "No longer needed")
        value: String
    ): String
}

type Mutation {
    updateSomeType(id: ID!): SomeType
}

type SomeType {
    id: ID!
    someField: String
    someDeprecatedField: String @deprecated(reason: "Use someField instead")
    subType: SomeSubType
}

type SomeSubType {
    name: String
    subTypeDeepDeprecatedField: String @deprecated(reason: "Removed upstream")
}
"#;

/// The operation document. It only spreads `SomeTypeFields` directly.
pub const DEPRECATIONS_QUERY: &str = r#"
query SomeQuery {
    someQuery {
        ...SomeTypeFields
    }
    someDeprecatedQuery
    someQueryWithDeprecatedInput(input: "value")
}
"#;

pub const SOME_TYPE_FRAGMENT: &str = r"
fragment SomeTypeFields on SomeType {
    id
    someField
    someDeprecatedField
    subType {
        ...SomeSubTypeFields
    }
}
";

/// Uses `@client`, which the schema does not define.
pub const SOME_SUB_TYPE_FRAGMENT: &str = r"
fragment SomeSubTypeFields on SomeSubType {
    name
    subTypeDeepDeprecatedField @client
}
";

/// Project-relative paths of the deprecation fixtures, in glob order.
pub const DEPRECATIONS_SCHEMA_PATH: &str = "test/schema.graphql";
pub const DEPRECATIONS_QUERY_PATH: &str = "test/query.graphql";
pub const SOME_SUB_TYPE_FRAGMENT_PATH: &str = "test/some-sub-type.graphql";
pub const SOME_TYPE_FRAGMENT_PATH: &str = "test/some-type.graphql";

/// The deprecation schema, validated.
pub fn deprecations_schema() -> Valid<Schema> {
    Schema::parse_and_validate(DEPRECATIONS_SCHEMA, DEPRECATIONS_SCHEMA_PATH)
        .expect("deprecation fixture schema is valid")
}

/// The three deprecation documents, parsed in memory.
pub fn deprecations_documents() -> DocumentSet {
    DocumentSet::from_sources(&[
        (DEPRECATIONS_QUERY_PATH, DEPRECATIONS_QUERY),
        (SOME_SUB_TYPE_FRAGMENT_PATH, SOME_SUB_TYPE_FRAGMENT),
        (SOME_TYPE_FRAGMENT_PATH, SOME_TYPE_FRAGMENT),
    ])
    .expect("deprecation fixture documents parse")
}

/// The deprecation fixtures written to disk under `test/`.
pub fn deprecations_project() -> TestProject {
    TestProjectBuilder::new()
        .with_schema(DEPRECATIONS_SCHEMA_PATH, DEPRECATIONS_SCHEMA)
        .with_document(DEPRECATIONS_QUERY_PATH, DEPRECATIONS_QUERY)
        .with_document(SOME_SUB_TYPE_FRAGMENT_PATH, SOME_SUB_TYPE_FRAGMENT)
        .with_document(SOME_TYPE_FRAGMENT_PATH, SOME_TYPE_FRAGMENT)
        .build()
}

/// Build a schema, adding `type Query { ok: String }` when `sdl` has no
/// `Query` type so that schemas exercising only mutations or subscriptions
/// still validate.
pub fn schema_with_root_query(sdl: &str) -> Valid<Schema> {
    let has_query = sdl.split_whitespace().collect::<Vec<_>>().windows(2).any(|w| {
        w[0] == "type" && (w[1] == "Query" || w[1].starts_with("Query{"))
    });
    let source = if has_query {
        sdl.to_string()
    } else {
        format!("type Query {{ ok: String }}\n{sdl}")
    };
    Schema::parse_and_validate(source, "schema.graphql").expect("test schema is valid")
}
