//! Terminal output for the command-line tool

pub mod formatter;

pub use formatter::{display_error, display_version, format_error};
