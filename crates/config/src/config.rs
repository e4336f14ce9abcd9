use crate::{ConfigError, Result};
use std::path::PathBuf;

const SCHEMA_FILE: &str = "schema-file";
const OPERATION_FILES_GLOB: &str = "operation-files-glob";
const REPORT_FILES: &str = "report-files";
const DENY_DUPLICATE_FRAGMENTS: &str = "deny-duplicate-fragments";

/// Resolved settings for one linter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinterConfig {
    /// Path to the schema definition file.
    pub schema_file: PathBuf,
    /// Glob selecting operation and fragment documents.
    pub operation_files_glob: String,
    /// Attach the originating file to each notice.
    pub report_files: bool,
    /// Treat two fragments with the same name as a fatal error.
    pub deny_duplicate_fragments: bool,
}

/// Values given on the command line. Each one that is set wins over the
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub schema_file: Option<PathBuf>,
    pub operation_files_glob: Option<String>,
    pub report_files: Option<bool>,
    pub deny_duplicate_fragments: Option<bool>,
}

/// Where environment values are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    /// GitHub Action inputs, exposed as `INPUT_<NAME>`.
    ActionInputs,
    /// Plain variables such as `SCHEMA_FILE`.
    Environment,
}

impl Source {
    fn detect(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        if lookup("CI").as_deref() == Some("true") {
            Self::ActionInputs
        } else {
            Self::Environment
        }
    }

    fn key(self, name: &str) -> String {
        match self {
            Self::ActionInputs => format!("INPUT_{}", name.to_uppercase()),
            Self::Environment => name.to_uppercase().replace('-', "_"),
        }
    }

    fn read(self, lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
        let value = lookup(&self.key(name))?;
        match self {
            // Action inputs are trimmed and an empty input counts as unset.
            Self::ActionInputs => {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Self::Environment => Some(value),
        }
    }

    fn read_bool(
        self,
        lookup: &impl Fn(&str) -> Option<String>,
        name: &str,
        default: bool,
    ) -> Result<bool> {
        let Some(value) = self.read(lookup, name) else {
            return Ok(default);
        };
        match self {
            Self::ActionInputs => parse_action_bool(name, &value),
            Self::Environment => Ok(value != "false"),
        }
    }
}

/// Booleans as the actions toolkit accepts them (YAML 1.2 core schema).
fn parse_action_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(ConfigError::InvalidBoolean {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Resolve the configuration from `overrides` and an environment `lookup`.
///
/// Required values are checked and the glob is compiled before anything is
/// read from disk.
pub fn load_from_lookup<F>(overrides: ConfigOverrides, lookup: F) -> Result<LinterConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let source = Source::detect(&lookup);
    tracing::debug!(?source, "Reading configuration");

    let schema_file = overrides
        .schema_file
        .or_else(|| source.read(&lookup, SCHEMA_FILE).map(PathBuf::from))
        .ok_or(ConfigError::MissingSchemaFile)?;

    let operation_files_glob = overrides
        .operation_files_glob
        .or_else(|| source.read(&lookup, OPERATION_FILES_GLOB))
        .ok_or(ConfigError::MissingOperationsGlob)?;

    glob::Pattern::new(&operation_files_glob).map_err(|err| ConfigError::InvalidGlob {
        pattern: operation_files_glob.clone(),
        source: err,
    })?;

    let report_files = match overrides.report_files {
        Some(value) => value,
        None => source.read_bool(&lookup, REPORT_FILES, true)?,
    };

    let deny_duplicate_fragments = match overrides.deny_duplicate_fragments {
        Some(value) => value,
        None => source.read_bool(&lookup, DENY_DUPLICATE_FRAGMENTS, false)?,
    };

    let config = LinterConfig {
        schema_file,
        operation_files_glob,
        report_files,
        deny_duplicate_fragments,
    };
    tracing::debug!(?config, "Configuration resolved");
    Ok(config)
}

/// Resolve the configuration from `overrides` and the process environment.
pub fn load_from_env(overrides: ConfigOverrides) -> Result<LinterConfig> {
    load_from_lookup(overrides, |key| std::env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<LinterConfig> {
        load_with(ConfigOverrides::default(), vars)
    }

    fn load_with(overrides: ConfigOverrides, vars: &[(&str, &str)]) -> Result<LinterConfig> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        load_from_lookup(overrides, |key| env.get(key).cloned())
    }

    #[test]
    fn test_local_environment() {
        let config = load(&[
            ("SCHEMA_FILE", "schema.graphql"),
            ("OPERATION_FILES_GLOB", "src/**/*.graphql"),
        ])
        .unwrap();

        assert_eq!(config.schema_file, PathBuf::from("schema.graphql"));
        assert_eq!(config.operation_files_glob, "src/**/*.graphql");
        assert!(config.report_files);
        assert!(!config.deny_duplicate_fragments);
    }

    #[test]
    fn test_local_report_files_is_lenient() {
        let base = [
            ("SCHEMA_FILE", "schema.graphql"),
            ("OPERATION_FILES_GLOB", "*.graphql"),
        ];

        let off = load(&[base[0], base[1], ("REPORT_FILES", "false")]).unwrap();
        assert!(!off.report_files);

        let other = load(&[base[0], base[1], ("REPORT_FILES", "no")]).unwrap();
        assert!(other.report_files);
    }

    #[test]
    fn test_action_inputs_on_ci() {
        let config = load(&[
            ("CI", "true"),
            ("INPUT_SCHEMA-FILE", "  schema.graphql \n"),
            ("INPUT_OPERATION-FILES-GLOB", "ops/*.graphql"),
            ("INPUT_REPORT-FILES", "FALSE"),
            ("INPUT_DENY-DUPLICATE-FRAGMENTS", "True"),
            ("SCHEMA_FILE", "ignored.graphql"),
        ])
        .unwrap();

        assert_eq!(config.schema_file, PathBuf::from("schema.graphql"));
        assert_eq!(config.operation_files_glob, "ops/*.graphql");
        assert!(!config.report_files);
        assert!(config.deny_duplicate_fragments);
    }

    #[test]
    fn test_ci_must_be_exactly_true() {
        let config = load(&[
            ("CI", "1"),
            ("SCHEMA_FILE", "schema.graphql"),
            ("OPERATION_FILES_GLOB", "*.graphql"),
        ])
        .unwrap();
        assert_eq!(config.schema_file, PathBuf::from("schema.graphql"));
    }

    #[test]
    fn test_invalid_action_boolean() {
        let err = load(&[
            ("CI", "true"),
            ("INPUT_SCHEMA-FILE", "schema.graphql"),
            ("INPUT_OPERATION-FILES-GLOB", "*.graphql"),
            ("INPUT_REPORT-FILES", "yes"),
        ])
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidBoolean { .. }));
        assert_eq!(
            err.to_string(),
            "Input \"report-files\" must be true or false, got \"yes\""
        );
    }

    #[test]
    fn test_empty_action_input_is_missing() {
        let err = load(&[
            ("CI", "true"),
            ("INPUT_SCHEMA-FILE", "   "),
            ("INPUT_OPERATION-FILES-GLOB", "*.graphql"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingSchemaFile));
    }

    #[test]
    fn test_missing_values() {
        let err = load(&[("OPERATION_FILES_GLOB", "*.graphql")]).unwrap_err();
        assert_eq!(err.to_string(), "Missing schema file path");

        let err = load(&[("SCHEMA_FILE", "schema.graphql")]).unwrap_err();
        assert_eq!(err.to_string(), "Missing operations glob");
    }

    #[test]
    fn test_invalid_glob() {
        let err = load(&[
            ("SCHEMA_FILE", "schema.graphql"),
            ("OPERATION_FILES_GLOB", "src/[*.graphql"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGlob { .. }));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = ConfigOverrides {
            schema_file: Some(PathBuf::from("cli.graphql")),
            operation_files_glob: None,
            report_files: Some(false),
            deny_duplicate_fragments: Some(true),
        };
        let config = load_with(
            overrides,
            &[
                ("SCHEMA_FILE", "env.graphql"),
                ("OPERATION_FILES_GLOB", "*.graphql"),
                ("REPORT_FILES", "true"),
            ],
        )
        .unwrap();

        assert_eq!(config.schema_file, PathBuf::from("cli.graphql"));
        assert_eq!(config.operation_files_glob, "*.graphql");
        assert!(!config.report_files);
        assert!(config.deny_duplicate_fragments);
    }
}
