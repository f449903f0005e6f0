//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Engine errors ─────────────────────────────────────────────────────────────

/// Failure talking to the container engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The engine binary could not be invoked at all.
    #[error("container engine '{program}' is not available: {reason}")]
    Unavailable { program: String, reason: String },

    /// The engine ran and exited non-zero.
    #[error("`{command}` failed: {detail}")]
    CommandFailed { command: String, detail: String },

    /// Reserved: status resolution degrades to `stopped` instead of raising this.
    #[error("state of container '{0}' is ambiguous")]
    AmbiguousState(String),
}

impl EngineError {
    /// Stable machine-readable code for JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "engine_unavailable",
            Self::CommandFailed { .. } => "engine_command_failed",
            Self::AmbiguousState(_) => "ambiguous_state",
        }
    }
}

// ── Catalog errors ────────────────────────────────────────────────────────────

/// Errors related to catalog construction and lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown service: {name}\n\nValid services: {valid}")]
    UnknownService { name: String, valid: String },

    #[error("Duplicate service name '{0}' in catalog")]
    DuplicateName(String),

    #[error("Duplicate container name '{0}' in catalog")]
    DuplicateContainer(String),

    #[error("Invalid container name '{0}': must match ^[a-zA-Z0-9][a-zA-Z0-9_.-]*$")]
    InvalidContainerName(String),

    #[error("Service '{0}' has an empty image reference")]
    EmptyImage(String),

    #[error("Service '{0}' must publish a non-zero port")]
    InvalidPort(String),
}

impl CatalogError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownService { .. } => "unknown_service",
            _ => "invalid_catalog",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}\n\n{hint}")]
    InvalidValue {
        key: String,
        value: String,
        hint: String,
    },
}

impl ConfigError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        "invalid_config"
    }
}
