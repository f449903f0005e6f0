//! `devsvc catalog` — the built-in service definitions, no engine queries.

use std::process::ExitCode;

use anyhow::Result;

use crate::domain::Catalog;
use crate::output::Renderer;

/// Run the catalog command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(renderer: &Renderer<'_>, catalog: &Catalog) -> Result<ExitCode> {
    renderer.render_catalog(catalog)?;
    Ok(ExitCode::SUCCESS)
}
