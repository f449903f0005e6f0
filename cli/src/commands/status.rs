//! `devsvc status` — one status line per service.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use devsvc_common::ServiceNode;

use crate::app::AppContext;

/// Arguments for the status command.
#[derive(Args, Default)]
pub struct StatusArgs {
    /// Only show this service
    pub service: Option<String>,
}

/// Run the status command.
///
/// # Errors
///
/// Returns an error if the named service is not in the catalog, or if JSON
/// serialization fails.
pub async fn run(app: &AppContext, args: &StatusArgs) -> Result<ExitCode> {
    let services = match &args.service {
        Some(name) => {
            let def = app.explorer.catalog().get(name)?;
            vec![ServiceNode {
                definition: def.clone(),
                status: app.explorer.status(def).await,
            }]
        }
        None => app.explorer.statuses().await,
    };
    app.renderer().render_statuses(&services)?;
    Ok(ExitCode::SUCCESS)
}
