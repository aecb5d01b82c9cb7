//! Parsing helpers for the CLI.

mod parsing;

pub use parsing::{
    check_format_flags, parse_optional_date, parse_optional_number, parse_optional_text,
};
