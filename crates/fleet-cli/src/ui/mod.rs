//! UI primitives for the Fleet CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode) plus
//!   the theme and language preferences
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, accent colour, text styles
//! - **Labels**: Translated field labels
//! - **Render**: Tables, headers, receipts, hints
//! - **Prompt**: Interactive input, selection and confirmation
//! - **Format**: String utilities
//!
//! # Usage
//!
//! ```ignore
//! let ui = ctx.ui_context(args.json, args.format.as_deref());
//! if ui.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//! println!("{}", header(&ui, "list", None));
//! println!("{}", table(&ui, &columns, &rows));
//! ```

mod context;
pub mod format;
pub mod labels;
mod mode;
pub mod prompt;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use labels::Field;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, field_kv, header, hint, kv, print, print_error, receipt, simple_table,
    table, Column,
};
