//! `devsvc config` — inspect configuration.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::infra::config::ENGINE_ENV;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the config path cannot be determined or JSON
/// serialization fails.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Show => show_config(app),
    }
}

fn show_config(app: &AppContext) -> Result<ExitCode> {
    let path = app.config_store.path()?;
    app.renderer().render_config(&app.config, &path)?;
    if !app.is_json()
        && let Some(program) = app.config_store.engine_override()
    {
        println!();
        app.output
            .info(&format!("engine.program set to '{program}' by {ENGINE_ENV}"));
    }
    Ok(ExitCode::SUCCESS)
}
