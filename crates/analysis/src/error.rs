use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// A fragment is spread, directly or through other fragments, but never defined.
    #[error(
        "Missing fragment \"{name}\" in {}{}",
        path.display(),
        did_you_mean(suggestion.as_deref())
    )]
    MissingFragment {
        name: String,
        path: PathBuf,
        suggestion: Option<String>,
    },
}

fn did_you_mean(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |name| format!(" (did you mean \"{name}\"?)"))
}
