//! Command handlers, one module per command group.

pub mod catalog;
pub mod documents;
pub mod init;
pub mod misc;
pub mod prefs;
pub mod vehicles;
