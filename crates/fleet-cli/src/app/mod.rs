//! Application-level utilities for the Fleet CLI.
//!
//! This module provides:
//! - Path resolution for config, database, documents and preferences
//! - The `AppContext` handed to every command handler

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::resolve_documents_dir;
