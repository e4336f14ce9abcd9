//! Snapshot testing assertions for notices
//!
//! Lists are formatted one item per line so inline snapshots stay readable.

use std::fmt::Display;

/// Format notices for snapshot testing, one per line, sorted.
///
/// # Example
///
/// ```ignore
/// use graphql_test_utils::format_notices;
///
/// let report = scan_documents(&schema, &documents, &index, &options)?;
/// insta::assert_snapshot!(format_notices(report.notices.iter()), @"...");
/// ```
pub fn format_notices<I, T>(notices: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut lines: Vec<String> = notices.into_iter().map(|n| n.to_string()).collect();
    if lines.is_empty() {
        return String::from("(no notices)");
    }
    lines.sort();
    lines.join("\n")
}
