//! JSON output.
//!
//! Every `--json` code path prints exactly one pretty-printed document to
//! stdout. Failures use the `{"error": true, "message", "code"}` shape.

use std::path::Path;

use anyhow::{Context, Result};
use devsvc_common::{ServiceNode, ServiceTree};
use serde_json::{Value, json};

use crate::domain::{ActionReport, Catalog, DevsvcConfig};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// One status record per service.
#[must_use]
pub fn statuses_value(services: &[ServiceNode]) -> Value {
    services
        .iter()
        .map(|node| {
            json!({
                "service": node.definition.name,
                "display_name": node.definition.display_name,
                "status": node.status,
                "description": node.description(),
                "port": node.definition.port,
            })
        })
        .collect()
}

/// One record per lifecycle action, success or failure.
#[must_use]
pub fn actions_value(reports: &[ActionReport]) -> Value {
    reports
        .iter()
        .map(|report| match &report.result {
            Ok(outcome) => json!({
                "service": report.service,
                "action": report.action.as_str(),
                "outcome": outcome.as_str(),
                "message": report.message(),
            }),
            Err(e) => json!({
                "service": report.service,
                "action": report.action.as_str(),
                "error": true,
                "message": report.message(),
                "code": e.code(),
            }),
        })
        .collect()
}

fn print(value: &impl serde::Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}

/// Renders domain types as JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_tree(&self, tree: &ServiceTree) -> Result<()> {
        print(tree)
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_statuses(&self, services: &[ServiceNode]) -> Result<()> {
        print(&statuses_value(services))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_catalog(&self, catalog: &Catalog) -> Result<()> {
        print(&catalog.services())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &DevsvcConfig, path: &Path) -> Result<()> {
        print(&json!({
            "path": path.display().to_string(),
            "engine": {
                "program": config.engine.program,
                "query_timeout_secs": config.engine.query_timeout_secs,
            },
        }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        print(&json!({ "version": version }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_actions(&self, reports: &[ActionReport]) -> Result<()> {
        print(&actions_value(reports))
    }
}
