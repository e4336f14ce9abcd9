//! Linter configuration.
//!
//! Settings come from command-line overrides first, then from the
//! environment. On CI (`CI=true`) the environment is read the way a GitHub
//! Action exposes its inputs (`INPUT_SCHEMA-FILE`, ...); elsewhere plain
//! variables (`SCHEMA_FILE`, ...) are used.

mod config;
mod error;

pub use config::{load_from_env, load_from_lookup, ConfigOverrides, LinterConfig};
pub use error::{ConfigError, Result};
