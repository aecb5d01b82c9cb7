//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying vehicles
//! in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{documents_json, print_json, vehicle_json};
pub use text::{print_vehicle, print_vehicle_list};
