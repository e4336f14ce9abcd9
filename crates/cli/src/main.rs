mod analysis;
mod exit_code;
mod output;
mod progress;

use analysis::DeprecationLinter;
use clap::Parser;
use exit_code::ExitCode;
use graphql_config::ConfigOverrides;
use std::path::PathBuf;

/// Fail a CI check when GraphQL operations use deprecated schema elements.
///
/// Options not given on the command line are read from the environment:
/// `SCHEMA_FILE`, `OPERATION_FILES_GLOB`, `REPORT_FILES` and
/// `DENY_DUPLICATE_FRAGMENTS`, or the matching `INPUT_*` action inputs when
/// `CI=true`.
#[derive(Parser)]
#[command(name = "graphql-deprecations")]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Path to the schema file
    #[arg(long, value_name = "FILE")]
    schema_file: Option<PathBuf>,

    /// Glob selecting operation and fragment files
    #[arg(long, value_name = "GLOB")]
    operation_files_glob: Option<String>,

    /// Include the operation file in each notice
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    report_files: Option<bool>,

    /// Fail when two fragments share a name
    #[arg(long)]
    deny_duplicate_fragments: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Force colored output even when not a TTY
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    no_color: bool,

    /// Suppress all output except errors and deprecations
    #[arg(short, long)]
    quiet: bool,

    /// Suppress progress indicators (spinners)
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            schema_file: self.schema_file.clone(),
            operation_files_glob: self.operation_files_glob.clone(),
            report_files: self.report_files,
            deny_duplicate_fragments: self.deny_duplicate_fragments.then_some(true),
        }
    }
}

/// Output verbosity options
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Whether to show progress indicators (spinners)
    pub show_progress: bool,
    /// Whether to show informational output (success messages)
    pub show_info: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON output for tooling
    Json,
    /// GitHub Actions workflow commands for PR annotations
    Github,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let output_opts = OutputOptions {
        show_progress: !cli.quiet && !cli.no_progress && matches!(cli.format, OutputFormat::Human),
        show_info: !cli.quiet,
    };

    let code = match run(&cli, output_opts).await {
        Ok(code) => code,
        Err(error) => {
            output::print_error(&error, cli.format);
            ExitCode::for_error(&error)
        }
    };

    tracing::debug!(%code, "Exiting");
    if code != ExitCode::Success {
        code.exit();
    }
}

async fn run(cli: &Cli, output_opts: OutputOptions) -> anyhow::Result<ExitCode> {
    let config = graphql_config::load_from_env(cli.overrides())?;

    let spinner = progress::spinner(
        "Scanning operations for deprecated usage...",
        output_opts.show_progress,
    );
    let result = DeprecationLinter::new(config).run().await;
    spinner.finish_and_clear();
    let report = result?;

    output::print_report(&report, cli.format, output_opts)?;

    Ok(if report.has_deprecations() {
        ExitCode::DeprecationsFound
    } else {
        ExitCode::Success
    })
}

/// Initialize tracing. Diagnostics are off unless `RUST_LOG` is set.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configure colored output based on flags and environment variables.
///
/// Priority order (highest to lowest):
/// 1. `--color` flag (force colors on)
/// 2. `--no-color` flag (force colors off)
/// 3. `NO_COLOR` environment variable (if set to any value, disable colors)
/// 4. `CLICOLOR_FORCE` environment variable (if set to non-zero, force colors)
/// 5. `CLICOLOR` environment variable (if set to "0", disable colors)
/// 6. Default: colors enabled if stdout is a TTY (handled by `colored` crate)
///
/// See: <https://no-color.org/> and <https://bixense.com/clicolors/>
fn configure_colors(force_color: bool, no_color: bool) {
    use colored::control;

    if force_color {
        control::set_override(true);
    } else if no_color {
        control::set_override(false);
    } else if std::env::var_os("NO_COLOR").is_some() {
        control::set_override(false);
    } else if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if !val.is_empty() && val != "0" {
            control::set_override(true);
        }
    } else if let Ok(val) = std::env::var("CLICOLOR") {
        if val == "0" {
            control::set_override(false);
        }
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_flags_become_overrides() {
        let cli = Cli::parse_from([
            "graphql-deprecations",
            "--schema-file",
            "schema.graphql",
            "--report-files",
            "false",
            "--deny-duplicate-fragments",
            "--format",
            "github",
        ]);
        let overrides = cli.overrides();

        assert_eq!(overrides.schema_file, Some(PathBuf::from("schema.graphql")));
        assert_eq!(overrides.operation_files_glob, None);
        assert_eq!(overrides.report_files, Some(false));
        assert_eq!(overrides.deny_duplicate_fragments, Some(true));
        assert!(matches!(cli.format, OutputFormat::Github));
    }

    #[test]
    fn test_unset_flags_defer_to_environment() {
        let cli = Cli::parse_from(["graphql-deprecations"]);
        assert_eq!(cli.overrides(), ConfigOverrides::default());
        assert!(matches!(cli.format, OutputFormat::Human));
    }

    #[test]
    fn test_color_flags_conflict() {
        let result = Cli::try_parse_from(["graphql-deprecations", "--color", "--no-color"]);
        assert!(result.is_err());
    }
}
