mod deprecation;
mod notice;
mod rules;
mod scan;

pub use deprecation::{deprecation_reason, DEFAULT_DEPRECATION_REASON};
pub use notice::{DeprecationNotice, NoticeKind, NoticeSet};
pub use rules::{scan_document, NoDeprecatedRule};
pub use scan::{scan_documents, DocumentValidation, ScanError, ScanOptions, ScanReport};
