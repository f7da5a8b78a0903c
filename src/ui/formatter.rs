//! Pure formatting functions for UI output.
//!
//! The calculated version goes to stdout on its own line so scripts can
//! capture it; everything else goes to stderr.

use console::style;

use crate::domain::Version;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print the calculated version to stdout.
pub fn display_version(version: &Version) {
    println!("{}", version);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_keeps_message() {
        let formatted = format_error("Invalid verbosity 'loud'");
        let plain = console::strip_ansi_codes(&formatted);
        assert_eq!(plain, "ERROR: Invalid verbosity 'loud'");
    }
}
