use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors raised while turning files on disk into parsed documents.
///
/// Every variant is fatal for a lint run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid operation files glob '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to expand operation files glob: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}:\n{message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid schema {}:\n{message}", path.display())]
    Schema { path: PathBuf, message: String },
}

impl LoadError {
    /// The file this error is about, when it concerns a single file.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } | Self::Schema { path, .. } => {
                Some(path)
            }
            Self::Pattern { .. } | Self::Glob(_) => None,
        }
    }
}
