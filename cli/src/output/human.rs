//! Human-readable terminal renderer.

use std::path::Path;

use devsvc_common::{ServiceNode, ServiceStatus, ServiceTree};
use owo_colors::OwoColorize as _;

use crate::domain::{ActionReport, Catalog, DevsvcConfig};
use crate::infra::config::{CONFIG_PATH_ENV, ENGINE_ENV};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

/// Single-character marker shown before a service name.
#[must_use]
pub fn status_symbol(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::NotPulled => "↓",
        ServiceStatus::Stopped => "○",
        ServiceStatus::Running => "●",
    }
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the fully expanded group / service / detail tree.
    pub fn render_tree(&self, tree: &ServiceTree) {
        if self.ctx.quiet {
            return;
        }
        for (i, group) in tree.groups.iter().enumerate() {
            if i > 0 {
                println!();
            }
            self.ctx.header(&group.group.label);
            for service in &group.services {
                self.print_service_line(&service.node, &service.description, 4);
                for detail in &service.details {
                    println!(
                        "        {:<10} {}",
                        format!("{}:", detail.label).style(self.ctx.styles.dim),
                        detail.value
                    );
                }
            }
        }
    }

    /// Render one status line per service.
    pub fn render_statuses(&self, services: &[ServiceNode]) {
        if self.ctx.quiet {
            return;
        }
        for node in services {
            self.print_service_line(node, &node.description(), 2);
        }
    }

    fn print_service_line(&self, node: &ServiceNode, description: &str, indent: usize) {
        let style = self.ctx.styles.status(node.status);
        println!(
            "{:indent$}{} {:<12} {}",
            "",
            status_symbol(node.status).style(style),
            node.definition.display_name,
            description.style(style),
        );
    }

    /// Render the catalog as a table.
    pub fn render_catalog(&self, catalog: &Catalog) {
        if self.ctx.quiet {
            return;
        }
        println!(
            "  {}",
            format!(
                "{:<10} {:<12} {:<10} {:<6} {}",
                "NAME", "SERVICE", "TYPE", "PORT", "IMAGE"
            )
            .style(self.ctx.styles.bold)
        );
        for def in catalog.services() {
            println!(
                "  {:<10} {:<12} {:<10} {:<6} {}",
                def.name, def.display_name, def.service_type, def.port, def.image
            );
        }
    }

    /// Render the effective configuration and the environment that shaped it.
    pub fn render_config(&self, config: &DevsvcConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<28} {}", "engine.program:", config.engine.program);
        println!(
            "  {:<28} {}",
            "engine.query_timeout_secs:",
            config
                .engine
                .query_timeout_secs
                .map_or_else(|| "(none)".to_string(), |s| s.to_string())
        );
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in [CONFIG_PATH_ENV, ENGINE_ENV, "DEVSVC_LOG", "NO_COLOR"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("devsvc {version}");
    }

    /// Render one notification per lifecycle action.
    pub fn render_actions(&self, reports: &[ActionReport]) {
        for report in reports {
            if report.is_success() {
                self.ctx.success(&report.message());
            } else {
                self.ctx.error(&report.message());
            }
        }
    }
}
