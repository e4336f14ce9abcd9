use crate::{AnalysisError, Result};
use apollo_compiler::ast;
use graphql_apollo_ext::DocumentExt;
use graphql_hir::{document_fragment_spreads, resolve_closure, FragmentClosure, FragmentIndex};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// An operation document rebuilt with exactly the fragments it needs.
#[derive(Debug, Clone)]
pub struct AssembledDocument {
    /// The file the operations come from.
    pub path: PathBuf,
    /// The operations, in source order, followed by one definition per
    /// closure member.
    pub document: ast::Document,
    pub closure: FragmentClosure,
}

/// Assemble the operations of `document` with the fragments they reach.
///
/// Returns `Ok(None)` for documents that define no operations; those only
/// contribute fragments and are never validated on their own.
pub fn assemble_document(
    path: &Path,
    document: &ast::Document,
    index: &FragmentIndex,
) -> Result<Option<AssembledDocument>> {
    if !document.has_operations() {
        tracing::trace!(path = %path.display(), "Skipping fragment-only document");
        return Ok(None);
    }

    let closure = resolve_closure(document_fragment_spreads(document), index);

    let mut assembled = ast::Document::new();
    assembled.sources = document.sources.clone();
    assembled.definitions.extend(
        document
            .operations()
            .map(|op| ast::Definition::OperationDefinition(op.clone())),
    );

    for name in &closure {
        let Some(entry) = index.get(name.as_str()) else {
            return Err(AnalysisError::MissingFragment {
                name: name.to_string(),
                path: path.to_path_buf(),
                suggestion: suggest_fragment(name.as_str(), index),
            });
        };
        Arc::make_mut(&mut assembled.sources)
            .extend(entry.sources.iter().map(|(id, file)| (*id, Arc::clone(file))));
        assembled
            .definitions
            .push(ast::Definition::FragmentDefinition(entry.definition.clone()));
    }

    tracing::debug!(
        path = %path.display(),
        fragments = closure.len(),
        "Assembled operation document"
    );

    Ok(Some(AssembledDocument {
        path: path.to_path_buf(),
        document: assembled,
        closure,
    }))
}

/// The closest known fragment name, when one is close enough to be a typo.
fn suggest_fragment(name: &str, index: &FragmentIndex) -> Option<String> {
    let max_distance = (name.len() / 3).max(1);
    index
        .names()
        .map(|candidate| (strsim::levenshtein(name, candidate.as_str()), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}
