use crate::{deprecation_reason, DeprecationNotice, NoticeKind, NoticeSet};
use apollo_compiler::{ast, Schema};
use graphql_apollo_ext::{walk_typed, TypeInfo, TypedVisitor};
use std::path::Path;

const UNKNOWN_TYPE: &str = "Unknown Type";

/// Collects deprecated field and argument usages from one document.
///
/// This rule checks for:
/// - Deprecated fields, reported as root fields when selected directly on a
///   root operation type
/// - Deprecated arguments in field and directive calls
pub struct NoDeprecatedRule<'a> {
    file: Option<&'a Path>,
    notices: NoticeSet,
}

impl<'a> NoDeprecatedRule<'a> {
    /// `file` is attached to every notice when set.
    #[must_use]
    pub fn new(file: Option<&'a Path>) -> Self {
        Self {
            file,
            notices: NoticeSet::new(),
        }
    }

    #[must_use]
    pub fn into_notices(self) -> NoticeSet {
        self.notices
    }

    fn report(&mut self, kind: NoticeKind, reason: &str) {
        self.notices
            .insert(DeprecationNotice::new(kind, self.file, reason));
    }
}

impl<'s> TypedVisitor<'s> for NoDeprecatedRule<'_> {
    fn enter_field(&mut self, info: &TypeInfo<'s>, field: &ast::Field) {
        let Some(reason) = info
            .field_def()
            .and_then(|def| deprecation_reason(&def.directives))
        else {
            return;
        };

        let parent = info
            .parent_type()
            .map_or_else(|| UNKNOWN_TYPE.to_string(), ToString::to_string);
        let field = field.name.to_string();
        let kind = if info.is_root_type(&parent) {
            NoticeKind::RootField {
                root: parent,
                field,
            }
        } else {
            NoticeKind::Field { parent, field }
        };
        self.report(kind, reason);
    }

    fn enter_argument(&mut self, info: &TypeInfo<'s>, argument: &ast::Argument) {
        let Some(reason) = info
            .argument()
            .and_then(|def| deprecation_reason(&def.directives))
        else {
            return;
        };

        let owner = info
            .field_def()
            .map_or_else(|| UNKNOWN_TYPE.to_string(), |def| def.name.to_string());
        self.report(
            NoticeKind::Argument {
                argument: argument.name.to_string(),
                owner,
            },
            reason,
        );
    }
}

/// Scan one document for deprecated usages.
///
/// Fragment spreads are not followed, so `document` should already contain the
/// fragments its operations need.
#[must_use]
pub fn scan_document(schema: &Schema, document: &ast::Document, file: Option<&Path>) -> NoticeSet {
    let mut rule = NoDeprecatedRule::new(file);
    walk_typed(schema, document, &mut rule);
    rule.into_notices()
}
