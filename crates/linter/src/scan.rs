use crate::{scan_document, NoticeSet};
use apollo_compiler::validation::Valid;
use apollo_compiler::Schema;
use graphql_analysis::{assemble_document, validate_document, AnalysisError, ValidationMessage};
use graphql_hir::FragmentIndex;
use graphql_syntax::DocumentSet;
use std::path::PathBuf;
use thiserror::Error;

/// Options for a deprecation scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Attach the operation file to each notice. The file then becomes part of
    /// the notice identity.
    pub report_files: bool,
    /// Fail the scan when two fragments share a name instead of using the
    /// last definition.
    pub deny_duplicate_fragments: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            report_files: true,
            deny_duplicate_fragments: false,
        }
    }
}

/// Validation errors for one operation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentValidation {
    pub path: PathBuf,
    pub messages: Vec<ValidationMessage>,
}

/// Everything a completed scan found.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub notices: NoticeSet,
    /// Only files with at least one message are listed.
    pub validation: Vec<DocumentValidation>,
    /// Number of operation documents assembled and scanned.
    pub scanned_documents: usize,
}

impl ScanReport {
    #[must_use]
    pub fn has_deprecations(&self) -> bool {
        !self.notices.is_empty()
    }

    #[must_use]
    pub fn has_validation_errors(&self) -> bool {
        !self.validation.is_empty()
    }
}

/// Errors that stop a scan. No notices are reported when one occurs.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    MissingFragment(#[from] AnalysisError),

    #[error(
        "Fragment \"{name}\" is defined in both {} and {}",
        first.display(),
        second.display()
    )]
    DuplicateFragment {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Assemble, validate and scan every operation document in `documents`.
///
/// Documents are processed in order. Fragment-only documents are skipped.
/// Validation errors are collected into the report and never stop the scan; a
/// missing fragment (or, with `deny_duplicate_fragments`, a duplicated one)
/// aborts it.
#[tracing::instrument(skip_all, fields(documents = documents.len(), fragments = index.len()))]
pub fn scan_documents(
    schema: &Valid<Schema>,
    documents: &DocumentSet,
    index: &FragmentIndex,
    options: &ScanOptions,
) -> Result<ScanReport, ScanError> {
    if options.deny_duplicate_fragments {
        if let Some(duplicate) = index.duplicates().first() {
            return Err(ScanError::DuplicateFragment {
                name: duplicate.name.to_string(),
                first: duplicate.first.clone(),
                second: duplicate.second.clone(),
            });
        }
    }

    let mut report = ScanReport::default();

    for (path, document) in documents.iter() {
        let Some(assembled) = assemble_document(path, document, index)? else {
            continue;
        };

        let messages = validate_document(schema, &assembled);
        if !messages.is_empty() {
            report.validation.push(DocumentValidation {
                path: path.to_path_buf(),
                messages,
            });
        }

        let file = options.report_files.then_some(path);
        let notices = scan_document(schema, &assembled.document, file);
        tracing::debug!(
            path = %path.display(),
            notices = notices.len(),
            "Scanned operation document"
        );
        report.notices.extend(notices);
        report.scanned_documents += 1;
    }

    tracing::debug!(
        notices = report.notices.len(),
        scanned = report.scanned_documents,
        "Scan complete"
    );
    Ok(report)
}
