//! Service lifecycle operations: pull, start, stop.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! Every operation is a single attempt; failures propagate unchanged.

use devsvc_common::ServiceDefinition;

use crate::application::ports::{
    ContainerInspector, ContainerLifecycle, ImageStore, ProgressReporter, RunSpec,
};
use crate::domain::{ActionOutcome, EngineError};

/// What `start` had to do to get the service running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// No container existed; one was created and started.
    Created,
    /// The existing container was started.
    Started,
}

impl From<StartOutcome> for ActionOutcome {
    fn from(outcome: StartOutcome) -> Self {
        match outcome {
            StartOutcome::Created => Self::Created,
            StartOutcome::Started => Self::Started,
        }
    }
}

/// Pull the service image.
///
/// # Errors
///
/// Returns the engine error if the pull fails.
pub async fn pull(
    engine: &impl ImageStore,
    def: &ServiceDefinition,
    reporter: &impl ProgressReporter,
) -> Result<(), EngineError> {
    reporter.step(&format!("pulling {}...", def.image));
    engine.pull_image(&def.image).await?;
    tracing::info!(service = %def.name, image = %def.image, "image pulled");
    reporter.success(&format!("pulled {}", def.image));
    Ok(())
}

/// Start the service, creating its container on first use.
///
/// The existence check completes before the create-or-start decision, so
/// repeated calls reuse the same container instead of creating another.
///
/// # Errors
///
/// Returns the engine error if the existence query, the create, or the start
/// fails. A failed existence query never falls through to a create.
pub async fn start(
    engine: &(impl ContainerInspector + ContainerLifecycle),
    def: &ServiceDefinition,
    reporter: &impl ProgressReporter,
) -> Result<StartOutcome, EngineError> {
    if engine.container_exists(&def.container_name).await? {
        reporter.step(&format!("starting {}...", def.container_name));
        engine.start_container(&def.container_name).await?;
        tracing::info!(service = %def.name, container = %def.container_name, "container started");
        reporter.success(&format!("{} started", def.container_name));
        return Ok(StartOutcome::Started);
    }

    reporter.step(&format!("creating {}...", def.container_name));
    engine.run_container(&RunSpec::for_service(def)).await?;
    tracing::info!(service = %def.name, container = %def.container_name, "container created");
    reporter.success(&format!("{} created", def.container_name));
    Ok(StartOutcome::Created)
}

/// Stop the service container.
///
/// No existence pre-check: stopping a missing container is the engine's
/// error to report.
///
/// # Errors
///
/// Returns the engine error if the stop fails.
pub async fn stop(
    engine: &impl ContainerLifecycle,
    def: &ServiceDefinition,
    reporter: &impl ProgressReporter,
) -> Result<(), EngineError> {
    reporter.step(&format!("stopping {}...", def.container_name));
    engine.stop_container(&def.container_name).await?;
    tracing::info!(service = %def.name, container = %def.container_name, "container stopped");
    reporter.success(&format!("{} stopped", def.container_name));
    Ok(())
}
