//! Temporary on-disk projects.
//!
//! Loader and CLI tests need real files and a glob to expand. The builder
//! writes everything into a fresh temp directory that is removed when the
//! [`TestProject`] is dropped.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for on-disk test projects.
///
/// # Example
///
/// ```ignore
/// use graphql_test_utils::TestProjectBuilder;
///
/// let project = TestProjectBuilder::new()
///     .with_schema("schema.graphql", SCHEMA)
///     .with_document("fragments.graphql", "fragment UserFields on User { id name }")
///     .with_document("queries.graphql", "query { user { ...UserFields } }")
///     .build();
///
/// let documents = load_documents(&project.glob("*.graphql"), &project.schema_path()).await?;
/// ```
#[derive(Default)]
pub struct TestProjectBuilder {
    schema: Option<(String, String)>,
    documents: Vec<(String, String)>,
}

impl TestProjectBuilder {
    /// Create a new empty project builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema file. Names are relative to the project root and may
    /// contain directories, like "test/schema.graphql".
    pub fn with_schema(mut self, name: &str, content: &str) -> Self {
        self.schema = Some((name.to_string(), content.to_string()));
        self
    }

    /// Add a document file to the project.
    pub fn with_document(mut self, name: &str, content: &str) -> Self {
        self.documents.push((name.to_string(), content.to_string()));
        self
    }

    /// Write every file into a new temp directory.
    pub fn build(self) -> TestProject {
        let dir = tempfile::tempdir().expect("failed to create temp dir");

        let schema = self
            .schema
            .unwrap_or_else(|| ("schema.graphql".to_string(), String::new()));
        write_file(dir.path(), &schema.0, &schema.1);
        for (name, content) in &self.documents {
            write_file(dir.path(), name, content);
        }

        TestProject {
            dir,
            schema_name: schema.0,
        }
    }
}

fn write_file(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create project directory");
    }
    fs::write(&path, content).expect("failed to write project file");
}

/// A project written to a temp directory.
pub struct TestProject {
    dir: TempDir,
    schema_name: String,
}

impl TestProject {
    /// The project root. Use it as the working directory to get relative paths
    /// in reports.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a project file.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Absolute path of the schema file.
    pub fn schema_path(&self) -> PathBuf {
        self.path(&self.schema_name)
    }

    /// An absolute glob pattern for `pattern` under the project root.
    pub fn glob(&self, pattern: &str) -> String {
        format!("{}/{pattern}", self.dir.path().display())
    }

    /// Add or overwrite a file after the project was built.
    pub fn write(&self, name: &str, content: &str) {
        write_file(self.dir.path(), name, content);
    }
}
