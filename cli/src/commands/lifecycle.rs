//! `devsvc pull|start|stop` — lifecycle operations on named services.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use devsvc_common::ServiceDefinition;

use crate::app::{AppContext, Engine};
use crate::application::ServiceExplorer;
use crate::application::ports::{ProgressReporter, SilentReporter};
use crate::domain::{ActionReport, LifecycleAction};

/// Arguments shared by pull, start, and stop.
#[derive(Args)]
pub struct LifecycleArgs {
    /// Services to act on, in order (see `devsvc catalog`)
    #[arg(required = true, value_name = "SERVICE")]
    pub services: Vec<String>,
}

/// Run one lifecycle action over every named service.
///
/// Names are resolved up front so a typo fails before anything changes.
/// After that every service is attempted; one failure does not skip the rest.
///
/// # Errors
///
/// Returns an error if a name is not in the catalog, or if JSON serialization
/// fails. Engine failures are reported per service and yield exit code 1.
pub async fn run(
    app: &AppContext,
    action: LifecycleAction,
    args: &LifecycleArgs,
) -> Result<ExitCode> {
    let defs = args
        .services
        .iter()
        .map(|name| app.explorer.catalog().get(name))
        .collect::<Result<Vec<_>, _>>()?;

    let reports = if app.is_json() {
        perform_all(&app.explorer, action, &defs, &SilentReporter).await
    } else {
        let reporter = app.terminal_reporter();
        perform_all(&app.explorer, action, &defs, &reporter).await
    };

    app.renderer().render_actions(&reports)?;
    if reports.iter().all(ActionReport::is_success) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

async fn perform_all(
    explorer: &ServiceExplorer<Engine>,
    action: LifecycleAction,
    defs: &[&ServiceDefinition],
    reporter: &impl ProgressReporter,
) -> Vec<ActionReport> {
    let mut reports = Vec::with_capacity(defs.len());
    for def in defs {
        reports.push(explorer.perform(action, def, reporter).await);
    }
    reports
}
