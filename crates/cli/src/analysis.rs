//! The lint pipeline as the CLI runs it.
//!
//! Loads the schema and every matched document, indexes fragments across
//! files and hands everything to `graphql_linter::scan_documents`.

use anyhow::Result;
use graphql_config::LinterConfig;
use graphql_hir::FragmentIndex;
use graphql_linter::{scan_documents, ScanOptions, ScanReport};
use graphql_syntax::{load_documents, load_schema, LoadError};
use thiserror::Error;

/// A failure while loading the schema, kept apart from document load failures
/// so it maps to its own exit code.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct SchemaLoadError(#[from] pub LoadError);

/// Runs one deprecation check for a resolved configuration.
pub struct DeprecationLinter {
    config: LinterConfig,
}

impl DeprecationLinter {
    #[must_use]
    pub fn new(config: LinterConfig) -> Self {
        Self { config }
    }

    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            report_files: self.config.report_files,
            deny_duplicate_fragments: self.config.deny_duplicate_fragments,
        }
    }

    /// Load, assemble, validate and scan.
    ///
    /// Any error is fatal and no partial report is returned.
    #[tracing::instrument(skip_all, fields(
        schema = %self.config.schema_file.display(),
        glob = %self.config.operation_files_glob,
    ))]
    pub async fn run(&self) -> Result<ScanReport> {
        let schema = load_schema(&self.config.schema_file)
            .await
            .map_err(SchemaLoadError)?;

        let documents =
            load_documents(&self.config.operation_files_glob, &self.config.schema_file).await?;
        if documents.is_empty() {
            tracing::warn!(
                glob = %self.config.operation_files_glob,
                "No operation files matched"
            );
        }

        let index = FragmentIndex::build(&documents);
        let report = scan_documents(&schema, &documents, &index, &self.scan_options())?;

        tracing::info!(
            documents = documents.len(),
            fragments = index.len(),
            notices = report.notices.len(),
            "Deprecation check finished"
        );
        Ok(report)
    }
}
