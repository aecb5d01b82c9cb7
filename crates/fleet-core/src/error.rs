//! Error types for Fleet core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Fleet operations.
pub type Result<T> = std::result::Result<T, FleetError>;

/// Core error type for Fleet operations.
#[derive(Debug, Error)]
pub enum FleetError {
    /// A write would violate a table constraint (duplicate license plate)
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Storage backend error (disk, corruption, permission, closed store)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl FleetError {
    /// Whether this error is a uniqueness/constraint failure.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, FleetError::ConstraintViolation(_))
    }
}

impl From<rusqlite::Error> for FleetError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(ref failure, _) = err {
            if failure.code == rusqlite::ErrorCode::ConstraintViolation {
                return FleetError::ConstraintViolation(err.to_string());
            }
        }
        FleetError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for FleetError {
    fn from(err: std::io::Error) -> Self {
        FleetError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for FleetError {
    fn from(err: serde_json::Error) -> Self {
        FleetError::Validation(err.to_string())
    }
}
