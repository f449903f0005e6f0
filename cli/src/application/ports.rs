//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;
use devsvc_common::{Environment, ServiceDefinition};

use crate::domain::{DevsvcConfig, EngineError};

// ── Value Types ───────────────────────────────────────────────────────────────

/// Everything the engine needs to create and start a service container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSpec<'a> {
    pub container_name: &'a str,
    pub image: &'a str,
    /// Published on the same number on both host and container side.
    pub port: u16,
    pub environment: &'a Environment,
}

impl<'a> RunSpec<'a> {
    #[must_use]
    pub fn for_service(def: &'a ServiceDefinition) -> Self {
        Self {
            container_name: &def.container_name,
            image: &def.image,
            port: def.port,
            environment: &def.environment,
        }
    }
}

// ── Engine Port Traits ────────────────────────────────────────────────────────

/// Local image inspection and retrieval.
#[allow(async_fn_in_trait)]
pub trait ImageStore {
    /// Whether the image is present locally.
    async fn image_exists(&self, image: &str) -> Result<bool, EngineError>;
    /// Pull the image from its registry.
    async fn pull_image(&self, image: &str) -> Result<(), EngineError>;
}

/// Container state inspection.
#[allow(async_fn_in_trait)]
pub trait ContainerInspector {
    /// Whether a container with this name is currently running.
    async fn container_running(&self, container_name: &str) -> Result<bool, EngineError>;
    /// Whether a container with this name exists, running or not.
    async fn container_exists(&self, container_name: &str) -> Result<bool, EngineError>;
}

/// Container lifecycle operations: create, start, stop.
#[allow(async_fn_in_trait)]
pub trait ContainerLifecycle {
    /// Create a container from `spec` and start it detached.
    async fn run_container(&self, spec: &RunSpec<'_>) -> Result<(), EngineError>;
    /// Start an existing container.
    async fn start_container(&self, container_name: &str) -> Result<(), EngineError>;
    /// Stop a container.
    async fn stop_container(&self, container_name: &str) -> Result<(), EngineError>;
}

/// Composite trait — any type implementing all three sub-traits is a `ContainerEngine`.
pub trait ContainerEngine: ImageStore + ContainerInspector + ContainerLifecycle {}

/// Blanket implementation: any type implementing all three sub-traits is a `ContainerEngine`.
impl<T> ContainerEngine for T where T: ImageStore + ContainerInspector + ContainerLifecycle {}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// Arguments are always passed as a discrete vector; implementations must
/// never route them through a shell.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program, killing it if it has not exited after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts where configuration comes from. Read-only: devsvc never writes it.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration exists but cannot be read or parsed.
    fn load(&self) -> Result<DevsvcConfig>;
    /// Location the configuration is read from.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
}

/// Reporter that discards every event.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
}
