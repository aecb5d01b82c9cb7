//! CLI error types for structured error handling.
//!
//! Handlers return `anyhow::Result`; `exit_code_for` inspects the error
//! chain so that both `CliError` and core `FleetError` values end in a
//! stable exit code.

use std::fmt;

use fleet_core::FleetError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (vehicle, document, file)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Write rejected because the record already exists
    Conflict { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::Conflict { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn conflict(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::Conflict {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Conflict { .. } => exit_codes::CONFLICT,
        }
    }
}

/// Exit code for a core error.
pub fn fleet_exit_code(err: &FleetError) -> i32 {
    match err {
        FleetError::NotFound(_) => exit_codes::NOT_FOUND,
        FleetError::Validation(_) => exit_codes::INVALID_INPUT,
        FleetError::ConstraintViolation(_) => exit_codes::CONFLICT,
        FleetError::Storage(_) => exit_codes::FAILURE,
    }
}

/// Exit code for any error returned by a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(cli) = cause.downcast_ref::<CliError>() {
            return cli.exit_code();
        }
        if let Some(fleet) = cause.downcast_ref::<FleetError>() {
            return fleet_exit_code(fleet);
        }
    }
    exit_codes::FAILURE
}

/// Convert a duplicate-plate failure into a `CliError::Conflict`, leaving
/// every other error untouched.
pub fn plate_conflict(err: FleetError, plate: &str) -> anyhow::Error {
    if err.is_constraint_violation() {
        CliError::conflict(
            format!("A vehicle with plate {} already exists", plate),
            format!("Hint: Run `fleet show {}` to see it.", plate),
        )
        .into()
    } else {
        err.into()
    }
}
