use crate::{fragment_spreads, FragmentNameSet};
use apollo_compiler::parser::SourceMap;
use apollo_compiler::{ast, Name, Node};
use graphql_apollo_ext::DocumentExt;
use graphql_syntax::DocumentSet;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// A fragment definition together with the file that defines it.
#[derive(Debug, Clone)]
pub struct FragmentEntry {
    pub definition: Node<ast::FragmentDefinition>,
    pub path: PathBuf,
    /// Sources of the defining document, for locating diagnostics.
    pub sources: SourceMap,
}

/// Two definitions sharing a fragment name. `second` is the one kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateFragment {
    pub name: Name,
    pub first: PathBuf,
    pub second: PathBuf,
}

/// Every fragment defined across a document set, keyed by name, with the
/// fragments each one spreads directly.
///
/// When two definitions share a name the one encountered last wins; the
/// collision is kept in [`FragmentIndex::duplicates`].
#[derive(Debug, Clone, Default)]
pub struct FragmentIndex {
    fragments: IndexMap<Name, FragmentEntry>,
    dependencies: IndexMap<Name, FragmentNameSet>,
    duplicates: Vec<DuplicateFragment>,
}

impl FragmentIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every fragment definition in `documents`, in document order.
    #[must_use]
    #[tracing::instrument(skip_all, fields(documents = documents.len()))]
    pub fn build(documents: &DocumentSet) -> Self {
        let mut index = Self::new();
        for (path, document) in documents.iter() {
            for fragment in document.fragments() {
                index.insert(path, &document.sources, fragment.clone());
            }
        }
        tracing::debug!(
            fragments = index.len(),
            duplicates = index.duplicates.len(),
            "Built fragment index"
        );
        index
    }

    /// Add one fragment definition, replacing any earlier one with the same name.
    pub fn insert(
        &mut self,
        path: &Path,
        sources: &SourceMap,
        definition: Node<ast::FragmentDefinition>,
    ) {
        let name = definition.name.clone();
        let spreads = fragment_spreads(&definition.selection_set);

        let entry = FragmentEntry {
            definition,
            path: path.to_path_buf(),
            sources: sources.clone(),
        };
        if let Some(previous) = self.fragments.insert(name.clone(), entry) {
            tracing::warn!(
                fragment = %name,
                first = %previous.path.display(),
                second = %path.display(),
                "Fragment defined more than once; using the last definition"
            );
            self.duplicates.push(DuplicateFragment {
                name: name.clone(),
                first: previous.path,
                second: path.to_path_buf(),
            });
        }
        self.dependencies.insert(name, spreads);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FragmentEntry> {
        self.fragments.get(name)
    }

    /// Fragments spread directly by the fragment called `name`.
    #[must_use]
    pub fn dependencies(&self, name: &str) -> Option<&FragmentNameSet> {
        self.dependencies.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.fragments.keys()
    }

    #[must_use]
    pub fn duplicates(&self) -> &[DuplicateFragment] {
        &self.duplicates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
