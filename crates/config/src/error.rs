use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing schema file path")]
    MissingSchemaFile,

    #[error("Missing operations glob")]
    MissingOperationsGlob,

    #[error("Input \"{name}\" must be true or false, got \"{value}\"")]
    InvalidBoolean { name: String, value: String },

    #[error("Invalid operations glob \"{pattern}\": {source}")]
    InvalidGlob {
        pattern: String,
        source: glob::PatternError,
    },
}
