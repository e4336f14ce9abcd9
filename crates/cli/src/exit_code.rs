//! Exit codes for the deprecation check.
//!
//! Distinct codes let CI scripts tell a failed gate (deprecated usage found)
//! apart from a broken setup.

use graphql_config::ConfigError;
use graphql_linter::ScanError;
use graphql_syntax::LoadError;

use crate::analysis::SchemaLoadError;

/// Exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// No deprecated usage found
    Success = 0,
    /// At least one deprecated field, argument or root field is used
    DeprecationsFound = 1,
    /// Missing or invalid configuration
    ConfigError = 2,
    /// Schema file unreadable or invalid
    SchemaError = 3,
    /// I/O error (file read failure, unreadable glob entry)
    IoError = 4,
    /// A document has invalid GraphQL syntax
    ParseError = 5,
    /// A referenced fragment is missing, or duplicated when duplicates are denied
    IntegrityError = 6,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Pick the exit code for a fatal error.
    #[must_use]
    pub fn for_error(error: &anyhow::Error) -> Self {
        if error.downcast_ref::<ConfigError>().is_some() {
            return Self::ConfigError;
        }
        if error.downcast_ref::<SchemaLoadError>().is_some() {
            return Self::SchemaError;
        }
        if error.downcast_ref::<ScanError>().is_some() {
            return Self::IntegrityError;
        }
        match error.downcast_ref::<LoadError>() {
            Some(LoadError::Pattern { .. }) => Self::ConfigError,
            Some(LoadError::Parse { .. }) => Self::ParseError,
            Some(LoadError::Schema { .. }) => Self::SchemaError,
            Some(LoadError::Io { .. } | LoadError::Glob(_)) | None => Self::IoError,
        }
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::DeprecationsFound => write!(f, "deprecated usage found"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SchemaError => write!(f, "schema load error"),
            Self::IoError => write!(f, "I/O error"),
            Self::ParseError => write!(f, "parse error"),
            Self::IntegrityError => write!(f, "fragment integrity error"),
        }
    }
}
