//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress bars,
//! spinners, and error messages to the user. Indicators draw on stderr so
//! command output on stdout stays machine-readable.

use indicatif::{ProgressBar, ProgressStyle};

/// Output settings derived from global flags
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Hide progress indicators
    pub quiet: bool,
}

impl OutputConfig {
    /// Create output settings
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Spinner for a phase of unknown length, hidden in quiet mode
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet {
            ProgressBar::hidden()
        } else {
            create_spinner(message)
        }
    }

    /// Progress bar over `total` items, hidden in quiet mode
    pub fn progress_bar(&self, total: u64, message: &str) -> ProgressBar {
        if self.quiet {
            ProgressBar::hidden()
        } else {
            create_progress_bar(total, message)
        }
    }
}

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Create a progress bar for per-file phases
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}
