//! Parsing helpers for field values and output format.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::CliError;

/// Table-style output format requested with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

/// Reject `--format` alongside `--json`.
pub fn check_format_flags(json: bool, format: Option<&str>) -> anyhow::Result<()> {
    let format = parse_output_format(format)?;
    if json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    Ok(())
}

/// Trimmed text, or `None` when blank.
pub fn parse_optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Number, or `None` when blank.
pub fn parse_optional_number<T: FromStr>(field: &str, value: &str) -> anyhow::Result<Option<T>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<T>().map(Some).map_err(|_| {
        CliError::invalid_input(format!("Invalid {}: '{}' is not a number", field, trimmed)).into()
    })
}

/// `YYYY-MM-DD` date, or `None` when blank.
pub fn parse_optional_date(field: &str, value: &str) -> anyhow::Result<Option<NaiveDate>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            CliError::invalid_input(format!(
                "Invalid {}: '{}' (expected YYYY-MM-DD)",
                field, trimmed
            ))
            .into()
        })
}
