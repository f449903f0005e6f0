//! `ServiceExplorer` — the surface a front-end drives.
//!
//! Bundles an engine and the catalog, and owns the refresh signal that tells
//! renderers to throw away their tree and ask for it again. Constructed once
//! and passed by reference; there is no global instance.

use std::time::Duration;

use devsvc_common::{
    DetailNode, GroupNode, ServiceDefinition, ServiceNode, ServiceStatus, ServiceTree,
    ServiceType, ViewNode,
};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::application::ports::{ContainerEngine, ProgressReporter};
use crate::application::services::lifecycle::{self, StartOutcome};
use crate::application::services::{status, view_model};
use crate::domain::{ActionOutcome, ActionReport, Catalog, EngineError, LifecycleAction};

pub struct ServiceExplorer<E: ContainerEngine> {
    engine: E,
    catalog: Catalog,
    refresh_tx: watch::Sender<u64>,
}

impl<E: ContainerEngine> ServiceExplorer<E> {
    #[must_use]
    pub fn new(engine: E, catalog: Catalog) -> Self {
        let (refresh_tx, _) = watch::channel(0);
        Self {
            engine,
            catalog,
            refresh_tx,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    // ── Tree ─────────────────────────────────────────────────────────────────

    #[must_use]
    pub fn list_groups(&self) -> Vec<GroupNode> {
        view_model::build_groups(&self.catalog)
    }

    pub async fn list_services(&self, service_type: ServiceType) -> Vec<ServiceNode> {
        view_model::build_services(&self.engine, &self.catalog, service_type).await
    }

    #[must_use]
    pub fn list_details(&self, service: &ServiceNode) -> Vec<DetailNode> {
        view_model::build_details(service)
    }

    pub async fn children(&self, parent: Option<&ViewNode>) -> Vec<ViewNode> {
        view_model::children(&self.engine, &self.catalog, parent).await
    }

    pub async fn tree(&self) -> ServiceTree {
        view_model::build_tree(&self.engine, &self.catalog).await
    }

    pub async fn status(&self, def: &ServiceDefinition) -> ServiceStatus {
        status::resolve(&self.engine, def).await
    }

    /// Every catalog service with its current status, in catalog order.
    pub async fn statuses(&self) -> Vec<ServiceNode> {
        let statuses = status::resolve_all(&self.engine, self.catalog.services()).await;
        self.catalog
            .services()
            .iter()
            .zip(statuses)
            .map(|(def, status)| ServiceNode {
                definition: def.clone(),
                status,
            })
            .collect()
    }

    // ── Refresh ──────────────────────────────────────────────────────────────

    /// Tell subscribers the tree is stale.
    pub fn refresh(&self) {
        self.refresh_tx.send_modify(|generation| *generation += 1);
    }

    /// Receiver that observes every `refresh()` issued after this call.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.refresh_tx.subscribe()
    }

    /// Draw the tree, then redraw it on every refresh until `shutdown`
    /// completes. Each `interval` tick issues a refresh of its own.
    ///
    /// `shutdown` is polled before the other branches, so a shutdown raised
    /// while a redraw is in flight ends the loop on the next iteration.
    ///
    /// # Errors
    ///
    /// Returns the first error from `draw`.
    pub async fn watch(
        &self,
        interval: Duration,
        shutdown: impl Future<Output = ()>,
        mut draw: impl FnMut(&ServiceTree) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        let mut refreshes = self.subscribe();
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;
        tokio::pin!(shutdown);

        draw(&self.tree().await)?;
        loop {
            tokio::select! {
                biased;
                () = &mut shutdown => break,
                _ = ticker.tick() => self.refresh(),
                changed = refreshes.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    tracing::debug!(generation = *refreshes.borrow_and_update(), "refresh");
                    draw(&self.tree().await)?;
                }
            }
        }
        Ok(())
    }

    // ── Lifecycle ────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns the engine error if the pull fails.
    pub async fn pull(
        &self,
        def: &ServiceDefinition,
        reporter: &impl ProgressReporter,
    ) -> Result<(), EngineError> {
        lifecycle::pull(&self.engine, def, reporter).await?;
        self.refresh();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the engine error if the existence query, create, or start fails.
    pub async fn start(
        &self,
        def: &ServiceDefinition,
        reporter: &impl ProgressReporter,
    ) -> Result<StartOutcome, EngineError> {
        let outcome = lifecycle::start(&self.engine, def, reporter).await?;
        self.refresh();
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns the engine error if the stop fails.
    pub async fn stop(
        &self,
        def: &ServiceDefinition,
        reporter: &impl ProgressReporter,
    ) -> Result<(), EngineError> {
        lifecycle::stop(&self.engine, def, reporter).await?;
        self.refresh();
        Ok(())
    }

    /// Run `action` against `def` and capture the result for display.
    pub async fn perform(
        &self,
        action: LifecycleAction,
        def: &ServiceDefinition,
        reporter: &impl ProgressReporter,
    ) -> ActionReport {
        let result = match action {
            LifecycleAction::Pull => self.pull(def, reporter).await.map(|()| ActionOutcome::Pulled),
            LifecycleAction::Start => self.start(def, reporter).await.map(ActionOutcome::from),
            LifecycleAction::Stop => self.stop(def, reporter).await.map(|()| ActionOutcome::Stopped),
        };
        if let Err(e) = &result {
            tracing::warn!(service = %def.name, action = action.as_str(), error = %e, "action failed");
        }
        ActionReport {
            service: def.name.clone(),
            display_name: def.display_name.clone(),
            port: def.port,
            action,
            result,
        }
    }
}
