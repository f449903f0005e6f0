//! Spinners shown while an engine operation runs.

#![allow(clippy::expect_used)] // Templates are compile-time constants

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Animation frames; the last one is shown once the spinner finishes.
const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "];
const RUNNING: &str = "  {spinner:.cyan} {msg}";
const FINISHED: &str = "  {prefix} {msg}";

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_strings(TICKS)
        .template(template)
        .expect("valid template")
}

/// Start a spinner for an operation of unknown length.
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(style(RUNNING));
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Replace the spinner with `✓ msg`.
pub fn finish_ok(pb: &ProgressBar, msg: &str) {
    finish(pb, "✓", msg);
}

/// Freeze the spinner as `✗` next to the step it was showing.
pub fn finish_failed(pb: &ProgressBar) {
    let msg = pb.message();
    finish(pb, "✗", &msg);
}

fn finish(pb: &ProgressBar, mark: &'static str, msg: &str) {
    pb.set_style(style(FINISHED));
    pb.set_prefix(mark);
    pb.finish_with_message(msg.to_string());
}
