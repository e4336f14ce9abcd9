//! Rendering a scan report in the supported output formats.

use crate::{OutputFormat, OutputOptions};
use colored::Colorize;
use graphql_linter::{DocumentValidation, ScanReport};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct JsonReport<'a> {
    success: bool,
    notices: Vec<JsonNotice<'a>>,
    validation: Vec<JsonValidation>,
}

#[derive(Serialize)]
struct JsonNotice<'a> {
    message: String,
    reason: &'a str,
    file: Option<String>,
}

#[derive(Serialize)]
struct JsonValidation {
    file: String,
    messages: Vec<String>,
}

/// Print `report` to stdout and stderr.
pub fn print_report(
    report: &ScanReport,
    format: OutputFormat,
    options: OutputOptions,
) -> io::Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    write_report(
        report,
        format,
        options,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Write `report`; `out` receives stdout content and `err` stderr content.
pub fn write_report(
    report: &ScanReport,
    format: OutputFormat,
    options: OutputOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => write_human(report, options, out, err),
        OutputFormat::Json => write_json(report, out),
        OutputFormat::Github => write_github(report, out),
    }
}

fn write_human(
    report: &ScanReport,
    options: OutputOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    for DocumentValidation { path, messages } in &report.validation {
        writeln!(err, "{}", "Validation errors:".yellow().bold())?;
        for message in messages {
            match message.location {
                Some((line, column)) => writeln!(
                    err,
                    "{}:{line}:{column}: {}",
                    path.display(),
                    message.message
                )?,
                None => writeln!(err, "{}", message.message)?,
            }
        }
    }

    if report.has_deprecations() {
        writeln!(err, "{}", "Deprecated fields found.".red().bold())?;
        for notice in &report.notices {
            writeln!(err, "{notice}")?;
        }
    } else if options.show_info {
        writeln!(out, "{}", "No deprecated fields found. GG!".green())?;
    }
    Ok(())
}

fn write_json(report: &ScanReport, out: &mut impl Write) -> io::Result<()> {
    let json = JsonReport {
        success: !report.has_deprecations(),
        notices: report
            .notices
            .iter()
            .map(|notice| JsonNotice {
                message: notice.kind.to_string(),
                reason: &notice.reason,
                file: notice
                    .file
                    .as_ref()
                    .map(|file| file.display().to_string()),
            })
            .collect(),
        validation: report
            .validation
            .iter()
            .map(|validation| JsonValidation {
                file: validation.path.display().to_string(),
                messages: validation
                    .messages
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)
}

fn write_github(report: &ScanReport, out: &mut impl Write) -> io::Result<()> {
    for validation in &report.validation {
        let file = escape_property(&validation.path.display().to_string());
        for message in &validation.messages {
            let text = escape_data(&message.message);
            match message.location {
                Some((line, column)) => {
                    writeln!(out, "::warning file={file},line={line},col={column}::{text}")?;
                }
                None => writeln!(out, "::warning file={file}::{text}")?,
            }
        }
    }

    for notice in &report.notices {
        let text = escape_data(&notice.kind.to_string());
        match &notice.file {
            Some(file) => writeln!(
                out,
                "::error file={}::{text}",
                escape_property(&file.display().to_string())
            )?,
            None => writeln!(out, "::error ::{text}")?,
        }
    }
    Ok(())
}

/// Print a fatal error to stderr.
pub fn print_error(error: &anyhow::Error, format: OutputFormat) {
    match format {
        OutputFormat::Human => eprintln!("{} {error}", "✗".red().bold()),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": error.to_string() }));
        }
        OutputFormat::Github => eprintln!("::error ::{}", escape_data(&error.to_string())),
    }
}

/// Escape workflow command message text.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
