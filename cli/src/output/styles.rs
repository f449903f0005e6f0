//! Output styles using owo-colors stylesheet pattern

use devsvc_common::ServiceStatus;
use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Success messages (green)
    pub success: Style,
    /// Error messages (red)
    pub error: Style,
    /// Info messages (blue)
    pub info: Style,
    /// Dimmed/secondary text
    pub dim: Style,
    /// Bold text
    pub bold: Style,
    /// Headers/section titles
    pub header: Style,
    /// Running services (green)
    pub running: Style,
    /// Stopped services (yellow)
    pub stopped: Style,
    /// Services whose image is missing (dimmed)
    pub not_pulled: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.error = Style::new().red();
        self.info = Style::new().blue();
        self.dim = Style::new().dimmed();
        self.bold = Style::new().bold();
        self.header = Style::new().bold().cyan();
        self.running = Style::new().green();
        self.stopped = Style::new().yellow();
        self.not_pulled = Style::new().dimmed();
    }

    /// Style for a service status marker.
    #[must_use]
    pub fn status(&self, status: ServiceStatus) -> Style {
        match status {
            ServiceStatus::Running => self.running,
            ServiceStatus::Stopped => self.stopped,
            ServiceStatus::NotPulled => self.not_pulled,
        }
    }
}
