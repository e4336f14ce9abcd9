use apollo_compiler::ast;

/// Reason reported for `@deprecated` without a `reason` argument.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// The deprecation reason carried by `directives`, if they mark a deprecation.
///
/// A bare `@deprecated` uses [`DEFAULT_DEPRECATION_REASON`]. An explicit empty
/// or `null` reason does not count as deprecated.
#[must_use]
pub fn deprecation_reason(directives: &ast::DirectiveList) -> Option<&str> {
    let directive = directives.get("deprecated")?;
    let Some(reason) = directive.specified_argument_by_name("reason") else {
        return Some(DEFAULT_DEPRECATION_REASON);
    };
    match &**reason {
        ast::Value::String(reason) if !reason.is_empty() => Some(reason.as_str()),
        _ => None,
    }
}
