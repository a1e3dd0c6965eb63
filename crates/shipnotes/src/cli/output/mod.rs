//! Output formatting utilities
//!
//! Status messages go to stderr so that stdout only carries tool output.

use console::{style, Style};

/// Print a success message
pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}
