//! `devsvc watch` — keep the service tree on screen, redrawing on refresh.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use console::Term;

use crate::app::AppContext;

/// Arguments for the watch command.
#[derive(Args)]
pub struct WatchArgs {
    /// Seconds between refreshes
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,
}

/// Run the watch command until Ctrl-C.
///
/// Each interval tick signals a refresh on the explorer; every observed
/// refresh re-queries the engine and redraws the whole tree.
///
/// # Errors
///
/// Returns an error if the terminal cannot be cleared or JSON serialization
/// fails.
pub async fn run(app: &AppContext, args: &WatchArgs) -> Result<ExitCode> {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for Ctrl-C");
        }
    };
    let clear = !app.is_json() && app.output.is_tty;

    app.explorer
        .watch(Duration::from_secs(args.interval), ctrl_c, |tree| {
            if clear {
                Term::stdout().clear_screen()?;
            }
            app.renderer().render_tree(tree)
        })
        .await?;
    Ok(ExitCode::SUCCESS)
}
