//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (vehicle, document, source file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The write collides with an existing record (duplicate plate).
    pub const CONFLICT: i32 = 5;
}

/// Name of the config file inside the config directory.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Name of the preferences file inside the config directory.
pub const PREFERENCES_FILENAME: &str = "preferences.json";

/// Name of the documents directory next to the database file.
pub const DOCUMENTS_DIRNAME: &str = "files";
