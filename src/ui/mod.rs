//! Terminal presentation layer
//!
//! This module handles:
//! - The spinner shown while the tool runs
//! - Verbose diagnostic lines on stderr
//! - Styled display of bundle information (see [`display`])
//!
//! Regular output goes to stdout. Everything diagnostic goes to stderr so the
//! tool's captured output can be piped on untouched.

pub mod display;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Prints `-v` diagnostics to stderr
#[derive(Debug, Clone, Copy)]
pub struct Verbose {
    enabled: bool,
}

impl Verbose {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    pub fn log(self, message: impl AsRef<str>) {
        if self.enabled {
            eprintln!("{}", Style::new().dim().apply_to(message.as_ref()));
        }
    }
}

/// Print a warning line to stderr
pub fn warn(message: impl AsRef<str>) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("Warning:"),
        message.as_ref()
    );
}

/// Spinner on stderr; indicatif keeps it hidden when stderr is not a terminal
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}...")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);
    pb.set_style(style);
    // Passed as the message so braces in paths are not read as template keys
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
