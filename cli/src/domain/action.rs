//! Lifecycle actions and their per-service results, as shown to the operator.

use crate::domain::error::EngineError;

/// A user-triggered lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Pull,
    Start,
    Stop,
}

impl LifecycleAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pull => "pull",
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

/// What a successful action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Pulled,
    Created,
    Started,
    Stopped,
}

impl ActionOutcome {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pulled => "pulled",
            Self::Created => "created",
            Self::Started => "started",
            Self::Stopped => "stopped",
        }
    }
}

/// Result of one action against one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub service: String,
    pub display_name: String,
    pub port: u16,
    pub action: LifecycleAction,
    pub result: Result<ActionOutcome, EngineError>,
}

impl ActionReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Notification text naming the service and, on failure, the engine error.
    #[must_use]
    pub fn message(&self) -> String {
        let name = &self.display_name;
        match &self.result {
            Ok(ActionOutcome::Pulled) => format!("Successfully pulled {name} image"),
            Ok(ActionOutcome::Created) => {
                format!("{name} created and started on port {}", self.port)
            }
            Ok(ActionOutcome::Started) => format!("{name} started successfully on port {}", self.port),
            Ok(ActionOutcome::Stopped) => format!("{name} stopped successfully"),
            Err(e) => match self.action {
                LifecycleAction::Pull => format!("Failed to pull {name} image: {e}"),
                LifecycleAction::Start => format!("Failed to start {name}: {e}"),
                LifecycleAction::Stop => format!("Failed to stop {name}: {e}"),
            },
        }
    }
}
