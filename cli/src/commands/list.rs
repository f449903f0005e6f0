//! `devsvc list` — the full group / service / detail tree.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;

/// Run the list command.
///
/// An unreachable engine is not an error here: every service shows as
/// stopped and the warnings go to the log.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let tree = app.explorer.tree().await;
    app.renderer().render_tree(&tree)?;
    Ok(ExitCode::SUCCESS)
}
