//! devsvc - inspect and control local development service containers

use std::process::ExitCode;

use clap::Parser;
use devsvc_cli::cli::Cli;
use devsvc_cli::domain::{CatalogError, ConfigError};
use devsvc_cli::output::json::format_error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "DEVSVC_LOG";

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Machine-readable code for a top-level failure.
fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<CatalogError>() {
        e.code()
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        e.code()
    } else {
        "error"
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;

    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            match format_error(&format!("{e:#}"), error_code(&e)) {
                Ok(out) if json => println!("{out}"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
