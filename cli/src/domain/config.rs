//! Domain types and validators for devsvc configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_ENGINE_PROGRAM: &str = "docker";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration read from `~/.devsvc/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DevsvcConfig {
    /// Container engine settings.
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Container engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine executable, looked up on `PATH` (`docker` by default).
    #[serde(default = "default_engine_program")]
    pub program: String,
    /// Upper bound for status queries. Lifecycle operations are never bounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_timeout_secs: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: default_engine_program(),
            query_timeout_secs: None,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout_secs.map(Duration::from_secs)
    }
}

fn default_engine_program() -> String {
    DEFAULT_ENGINE_PROGRAM.to_string()
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a loaded configuration.
///
/// # Errors
///
/// Returns an error if the engine program is empty or contains whitespace,
/// or if the query timeout is zero.
pub fn validate_config(config: &DevsvcConfig) -> Result<(), ConfigError> {
    let program = &config.engine.program;
    if program.is_empty() || program.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidValue {
            key: "engine.program".to_string(),
            value: program.clone(),
            hint: "Expected a single executable name or path, e.g. docker or podman.".to_string(),
        });
    }
    if config.engine.query_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidValue {
            key: "engine.query_timeout_secs".to_string(),
            value: "0".to_string(),
            hint: "Expected a positive number of seconds, or omit the key.".to_string(),
        });
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
