//! Application service — service status resolution.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use devsvc_common::{ServiceDefinition, ServiceStatus};
use futures_util::future::join_all;

use crate::application::ports::{ContainerInspector, ImageStore};
use crate::domain::EngineError;

/// Classify the live status of one service.
///
/// This function is infallible. Engine errors are logged and reported as
/// [`ServiceStatus::Stopped`]: an unreachable engine must never look like a
/// missing image, which would invite a pull.
pub async fn resolve(
    engine: &(impl ImageStore + ContainerInspector),
    def: &ServiceDefinition,
) -> ServiceStatus {
    match classify(engine, def).await {
        Ok(status) => status,
        Err(e) => {
            tracing::warn!(service = %def.name, error = %e, "status query failed; reporting stopped");
            ServiceStatus::Stopped
        }
    }
}

/// Resolve every definition concurrently, returning statuses in input order.
pub async fn resolve_all<'a>(
    engine: &(impl ImageStore + ContainerInspector),
    defs: impl IntoIterator<Item = &'a ServiceDefinition>,
) -> Vec<ServiceStatus> {
    join_all(defs.into_iter().map(|def| resolve(engine, def))).await
}

async fn classify(
    engine: &(impl ImageStore + ContainerInspector),
    def: &ServiceDefinition,
) -> Result<ServiceStatus, EngineError> {
    if !engine.image_exists(&def.image).await? {
        return Ok(ServiceStatus::NotPulled);
    }
    if engine.container_running(&def.container_name).await? {
        return Ok(ServiceStatus::Running);
    }
    // Created-but-stopped and never-created both report `Stopped`; the
    // existence query is still issued so its failure is observed and logged.
    let exists = engine.container_exists(&def.container_name).await?;
    tracing::debug!(service = %def.name, exists, "container not running");
    Ok(ServiceStatus::Stopped)
}
