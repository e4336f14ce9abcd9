use crate::parse::{is_same_file, normalize_path, parse_document, parse_schema};
use crate::{LoadError, Result};
use apollo_compiler::ast;
use apollo_compiler::validation::Valid;
use apollo_compiler::Schema;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Parsed documents keyed by their (normalized) file path.
///
/// Iteration follows insertion order, which for [`load_documents`] is the
/// order the glob yielded the files in.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    documents: IndexMap<PathBuf, Arc<ast::Document>>,
}

impl DocumentSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse in-memory sources into a set, without touching the file system.
    pub fn from_sources<P: AsRef<Path>>(sources: &[(P, &str)]) -> Result<Self> {
        let mut set = Self::new();
        for (path, source) in sources {
            let path = normalize_path(path.as_ref());
            let document = parse_document(source, &path)?;
            set.insert(path, document);
        }
        Ok(set)
    }

    /// Add a document, replacing any previous document at the same path.
    pub fn insert(&mut self, path: impl AsRef<Path>, document: ast::Document) {
        self.documents
            .insert(normalize_path(path.as_ref()), Arc::new(document));
    }

    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Arc<ast::Document>> {
        self.documents.get(&normalize_path(path.as_ref()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Arc<ast::Document>)> {
        self.documents
            .iter()
            .map(|(path, document)| (path.as_path(), document))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Expand `pattern` into the regular files it matches, skipping the schema file.
#[tracing::instrument(fields(schema = %schema_path.display()))]
pub fn expand_glob(pattern: &str, schema_path: &Path) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|source| LoadError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut matched = Vec::new();
    for entry in paths {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        if is_same_file(&path, schema_path) {
            tracing::debug!(path = %path.display(), "Skipping schema file matched by glob");
            continue;
        }
        matched.push(normalize_path(&path));
    }

    tracing::debug!(count = matched.len(), "Expanded operation files glob");
    Ok(matched)
}

/// Read and parse every document matched by `pattern`.
///
/// Files are read one after another; the first read or parse failure aborts
/// the load.
#[tracing::instrument(fields(schema = %schema_path.display()))]
pub async fn load_documents(pattern: &str, schema_path: &Path) -> Result<DocumentSet> {
    let mut documents = DocumentSet::new();

    for path in expand_glob(pattern, schema_path)? {
        let source = read_file(&path).await?;
        let document = parse_document(&source, &path)?;
        tracing::trace!(
            path = %path.display(),
            definitions = document.definitions.len(),
            "Parsed document"
        );
        documents.insert(path, document);
    }

    tracing::debug!(documents = documents.len(), "Loaded operation documents");
    Ok(documents)
}

/// Read and validate the schema file.
#[tracing::instrument(fields(path = %path.display()))]
pub async fn load_schema(path: &Path) -> Result<Valid<Schema>> {
    let source = read_file(path).await?;
    let schema = parse_schema(&source, path)?;
    tracing::debug!(types = schema.types.len(), "Loaded schema");
    Ok(schema)
}

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}
