//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::{DevsvcConfig, validate_config};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "DEVSVC_CONFIG";
/// Environment variable overriding `engine.program`.
pub const ENGINE_ENV: &str = "DEVSVC_ENGINE";

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
#[derive(Debug, Default, Clone)]
pub struct YamlConfigStore {
    /// Explicit file location; `~/.devsvc/config.yaml` when `None`.
    path_override: Option<PathBuf>,
    /// Replaces `engine.program` from the file.
    engine_override: Option<String>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(path_override: Option<PathBuf>, engine_override: Option<String>) -> Self {
        Self {
            path_override,
            engine_override,
        }
    }

    /// Store honouring `DEVSVC_CONFIG` and `DEVSVC_ENGINE`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
            std::env::var(ENGINE_ENV).ok().filter(|p| !p.is_empty()),
        )
    }

    /// Name of the override in effect for `engine.program`, if any.
    #[must_use]
    pub fn engine_override(&self) -> Option<&str> {
        self.engine_override.as_deref()
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<DevsvcConfig> {
        let path = self.path()?;
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("cannot parse {}", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            DevsvcConfig::default()
        };

        if let Some(program) = &self.engine_override {
            config.engine.program.clone_from(program);
        }

        validate_config(&config).with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path_override {
            return Ok(path.clone());
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".devsvc").join("config.yaml"))
    }
}
