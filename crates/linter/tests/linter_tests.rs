//! Integration tests for graphql-linter.
//!
//! These run the full scan over the shared multi-file fixture: one operation
//! file and two fragment files, one fragment reached only through the other.

use graphql_hir::FragmentIndex;
use graphql_linter::{scan_documents, ScanError, ScanOptions, ScanReport};
use graphql_syntax::DocumentSet;
use graphql_test_utils::fixtures::{
    deprecations_documents, deprecations_project, deprecations_schema, schema_with_root_query,
    DEPRECATIONS_QUERY_PATH,
};
use graphql_test_utils::format_notices;

fn scan(documents: &DocumentSet, report_files: bool) -> ScanReport {
    let schema = deprecations_schema();
    let index = FragmentIndex::build(documents);
    let options = ScanOptions {
        report_files,
        ..ScanOptions::default()
    };
    scan_documents(&schema, documents, &index, &options).unwrap()
}

#[test]
fn test_finds_all_deprecated_usages() {
    let documents = deprecations_documents();
    let index = FragmentIndex::build(&documents);
    assert_eq!(documents.len(), 3);
    assert_eq!(index.len(), 2);

    let report = scan(&documents, false);

    assert_eq!(report.notices.len(), 4);
    assert_eq!(report.scanned_documents, 1);
    insta::assert_snapshot!(format_notices(&report.notices), @r#"
    Argument "input" from "someQueryWithDeprecatedInput" is deprecated
    Field "SomeSubType.subTypeDeepDeprecatedField" is deprecated
    Field "SomeType.someDeprecatedField" is deprecated
    Query "someDeprecatedQuery" is deprecated
    "#);
}

#[test]
fn test_finds_all_deprecated_usages_with_files() {
    let report = scan(&deprecations_documents(), true);

    assert_eq!(report.notices.len(), 4);
    insta::assert_snapshot!(format_notices(&report.notices), @r#"
    Argument "input" from "someQueryWithDeprecatedInput" is deprecated in test/query.graphql
    Field "SomeSubType.subTypeDeepDeprecatedField" is deprecated in test/query.graphql
    Field "SomeType.someDeprecatedField" is deprecated in test/query.graphql
    Query "someDeprecatedQuery" is deprecated in test/query.graphql
    "#);
}

#[test]
fn test_unknown_directive_is_not_a_validation_error() {
    let report = scan(&deprecations_documents(), false);
    assert!(!report.has_validation_errors());
}

#[test]
fn test_scan_is_idempotent() {
    let documents = deprecations_documents();
    let first = scan(&documents, false);
    let second = scan(&documents, false);

    assert_eq!(first.notices.len(), second.notices.len());
    assert_eq!(first.notices, second.notices);
}

#[test]
fn test_same_usage_in_two_files() {
    let schema = schema_with_root_query(r#"type Query { old: String @deprecated(reason: "x") }"#);
    let documents = DocumentSet::from_sources(&[
        ("a.graphql", "query A { old }"),
        ("b.graphql", "query B { old }"),
    ])
    .unwrap();
    let index = FragmentIndex::build(&documents);

    let with_files = scan_documents(&schema, &documents, &index, &ScanOptions::default()).unwrap();
    insta::assert_snapshot!(format_notices(&with_files.notices), @r#"
    Query "old" is deprecated in a.graphql
    Query "old" is deprecated in b.graphql
    "#);

    let options = ScanOptions {
        report_files: false,
        ..ScanOptions::default()
    };
    let without_files = scan_documents(&schema, &documents, &index, &options).unwrap();
    insta::assert_snapshot!(format_notices(&without_files.notices), @r#"Query "old" is deprecated"#);
}

#[test]
fn test_fragment_only_documents_are_not_scanned() {
    let schema = schema_with_root_query(
        r#"type Query { user: User } type User { old: String @deprecated(reason: "x") }"#,
    );
    let documents =
        DocumentSet::from_sources(&[("frags.graphql", "fragment F on User { old }")]).unwrap();
    let index = FragmentIndex::build(&documents);

    let report = scan_documents(&schema, &documents, &index, &ScanOptions::default()).unwrap();
    assert_eq!(report.scanned_documents, 0);
    assert!(!report.has_deprecations());
}

#[test]
fn test_missing_fragment_is_fatal() {
    let schema = schema_with_root_query(
        r#"type Query { old: String @deprecated(reason: "x") user: User } type User { id: ID! }"#,
    );
    let documents = DocumentSet::from_sources(&[
        ("a.graphql", "query A { old }"),
        ("b.graphql", "query B { user { ...Missing } }"),
    ])
    .unwrap();
    let index = FragmentIndex::build(&documents);

    let err = scan_documents(&schema, &documents, &index, &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, ScanError::MissingFragment(_)));
    assert_eq!(err.to_string(), "Missing fragment \"Missing\" in b.graphql");
}

#[test]
fn test_validation_errors_are_reported_and_scan_continues() {
    let schema = schema_with_root_query(r#"type Query { old: String @deprecated(reason: "x") }"#);
    let documents =
        DocumentSet::from_sources(&[("a.graphql", "query { old missing }")]).unwrap();
    let index = FragmentIndex::build(&documents);

    let report = scan_documents(&schema, &documents, &index, &ScanOptions::default()).unwrap();
    assert_eq!(report.validation.len(), 1);
    assert_eq!(report.validation[0].messages.len(), 1);
    assert!(report.validation[0].messages[0].message.contains("missing"));
    assert_eq!(report.notices.len(), 1);
}

#[test]
fn test_missing_fragment_discards_earlier_validation_errors() {
    let schema = schema_with_root_query(
        r#"type Query { old: String @deprecated(reason: "x") user: User } type User { id: ID! }"#,
    );
    let documents = DocumentSet::from_sources(&[
        ("a.graphql", "query A { old missing }"),
        ("b.graphql", "query B { user { ...Missing } }"),
    ])
    .unwrap();
    let index = FragmentIndex::build(&documents);

    let result = scan_documents(&schema, &documents, &index, &ScanOptions::default());
    assert!(matches!(result, Err(ScanError::MissingFragment(_))));
}

#[test]
fn test_duplicate_fragments() {
    let schema = schema_with_root_query(
        r#"type Query { user: User } type User { id: ID! old: String @deprecated(reason: "x") }"#,
    );
    let documents = DocumentSet::from_sources(&[
        ("first.graphql", "fragment F on User { id }"),
        ("second.graphql", "fragment F on User { old }"),
        ("query.graphql", "query { user { ...F } }"),
    ])
    .unwrap();
    let index = FragmentIndex::build(&documents);

    // The last definition wins by default.
    let report = scan_documents(&schema, &documents, &index, &ScanOptions::default()).unwrap();
    insta::assert_snapshot!(
        format_notices(&report.notices),
        @r#"Field "User.old" is deprecated in query.graphql"#
    );

    let options = ScanOptions {
        deny_duplicate_fragments: true,
        ..ScanOptions::default()
    };
    let err = scan_documents(&schema, &documents, &index, &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Fragment \"F\" is defined in both first.graphql and second.graphql"
    );
}

#[tokio::test]
async fn test_scan_loaded_from_disk() {
    let project = deprecations_project();
    let schema = graphql_syntax::load_schema(&project.schema_path())
        .await
        .unwrap();
    let documents =
        graphql_syntax::load_documents(&project.glob("test/*.graphql"), &project.schema_path())
            .await
            .unwrap();
    assert_eq!(documents.len(), 3);

    let index = FragmentIndex::build(&documents);
    let report = scan_documents(&schema, &documents, &index, &ScanOptions::default()).unwrap();

    let query_path = project.path(DEPRECATIONS_QUERY_PATH);
    assert_eq!(report.notices.len(), 4);
    assert!(report
        .notices
        .iter()
        .all(|notice| notice.file.as_deref() == Some(query_path.as_path())));
}
