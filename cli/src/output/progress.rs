//! Progress indicators using indicatif

#![allow(clippy::expect_used)] // Templates are compile-time constants

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner shown while a launched command runs.
///
/// # Panics
///
/// Panics if the spinner template string is invalid (it is a compile-time constant and will not panic).
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"])
            .template("{spinner:.cyan} {msg} {elapsed:.dim}")
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Spinner only when `enabled`; otherwise a hidden bar that renders nothing.
#[must_use]
pub fn spinner_if(enabled: bool, msg: &str) -> ProgressBar {
    if enabled {
        spinner(msg)
    } else {
        ProgressBar::hidden()
    }
}

/// Clear a spinner so the command's own output starts on a clean line.
pub fn finish_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}
