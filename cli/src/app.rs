//! Application context — unified state passed to every command handler.
//!
//! Built once per invocation after the configuration has been loaded, so
//! every handler sees the same engine, catalog, and output settings.

use anyhow::Result;

use crate::application::ServiceExplorer;
use crate::application::ports::ConfigStore;
use crate::domain::{Catalog, DevsvcConfig};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::engine::CliEngine;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

impl OutputMode {
    #[must_use]
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Human }
    }
}

/// Renderer for `mode` writing through `output`.
#[must_use]
pub fn renderer(output: &OutputContext, mode: OutputMode) -> Renderer<'_> {
    match mode {
        OutputMode::Human => Renderer::Human(HumanRenderer::new(output)),
        OutputMode::Json => Renderer::Json(JsonRenderer),
    }
}

/// Engine type used by the binary.
pub type Engine = CliEngine<TokioCommandRunner>;

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Catalog plus engine, with the refresh signal.
    pub explorer: ServiceExplorer<Engine>,
    /// Where the configuration came from.
    pub config_store: YamlConfigStore,
    /// Effective configuration, overrides applied.
    pub config: DevsvcConfig,
}

impl AppContext {
    /// Load configuration from the environment and assemble the explorer.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is unreadable or invalid,
    /// or if the built-in catalog fails validation.
    pub fn new(output: OutputContext, mode: OutputMode) -> Result<Self> {
        let config_store = YamlConfigStore::from_env();
        let config = config_store.load()?;
        let engine = CliEngine::from_config(&config.engine);
        tracing::debug!(program = %config.engine.program, "engine configured");

        Ok(Self {
            output,
            mode,
            explorer: ServiceExplorer::new(engine, Catalog::builtin()?),
            config_store,
            config,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        renderer(&self.output, self.mode)
    }

    /// Progress reporter for lifecycle operations.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}
