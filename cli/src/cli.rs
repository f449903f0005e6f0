//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::app::{AppContext, OutputMode, renderer};
use crate::commands;
use crate::domain::{Catalog, LifecycleAction};
use crate::output::OutputContext;

/// Inspect and control local development service containers
#[derive(Parser)]
#[command(
    name = "devsvc",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Log engine commands to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show every service grouped by type, with status and connection details
    List,

    /// Show service status
    Status(commands::status::StatusArgs),

    /// Show the built-in service catalog (no engine queries)
    Catalog,

    /// Pull service images
    Pull(commands::lifecycle::LifecycleArgs),

    /// Start services, creating their containers on first use
    Start(commands::lifecycle::LifecycleArgs),

    /// Stop service containers
    Stop(commands::lifecycle::LifecycleArgs),

    /// Re-render the service tree whenever it changes
    Watch(commands::watch::WatchArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or catalog cannot be loaded, or
    /// if the command itself fails.
    pub async fn run(self) -> Result<ExitCode> {
        let output = OutputContext::new(self.no_color, self.quiet);
        let mode = OutputMode::from_json_flag(self.json);

        // Neither needs config or an engine; a broken config must not hide them.
        let command = match self.command {
            Command::Version => return commands::version::run(&renderer(&output, mode)),
            Command::Catalog => {
                return commands::catalog::run(&renderer(&output, mode), &Catalog::builtin()?);
            }
            Command::List => EngineCommand::List,
            Command::Status(args) => EngineCommand::Status(args),
            Command::Pull(args) => EngineCommand::Lifecycle(LifecycleAction::Pull, args),
            Command::Start(args) => EngineCommand::Lifecycle(LifecycleAction::Start, args),
            Command::Stop(args) => EngineCommand::Lifecycle(LifecycleAction::Stop, args),
            Command::Watch(args) => EngineCommand::Watch(args),
            Command::Config(cmd) => EngineCommand::Config(cmd),
        };

        let app = AppContext::new(output, mode)?;
        command.run(&app).await
    }
}

/// Commands that need loaded configuration and an engine.
enum EngineCommand {
    List,
    Status(commands::status::StatusArgs),
    Lifecycle(LifecycleAction, commands::lifecycle::LifecycleArgs),
    Watch(commands::watch::WatchArgs),
    Config(commands::config::ConfigCommand),
}

impl EngineCommand {
    async fn run(self, app: &AppContext) -> Result<ExitCode> {
        match self {
            Self::List => commands::list::run(app).await,
            Self::Status(args) => commands::status::run(app, &args).await,
            Self::Lifecycle(action, args) => commands::lifecycle::run(app, action, &args).await,
            Self::Watch(args) => commands::watch::run(app, &args).await,
            Self::Config(cmd) => commands::config::run(app, cmd),
        }
    }
}
