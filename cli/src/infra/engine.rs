//! Infrastructure implementation of the container engine port traits.
//!
//! `CliEngine<R>` drives a docker-compatible CLI (`docker`, `podman`) through
//! a `CommandRunner`. Every call is one process with a discrete argument
//! vector; nothing is ever passed through a shell.

use std::time::Duration;

use tracing::debug;

use crate::application::ports::{
    CommandRunner, ContainerInspector, ContainerLifecycle, ImageStore, RunSpec,
};
use crate::domain::{EngineConfig, EngineError};
use crate::infra::command_runner::TokioCommandRunner;

/// Infrastructure adapter that routes all engine CLI calls through a `CommandRunner`.
///
/// Generic over `R: CommandRunner` so that tests can inject a recording
/// runner without spawning real processes.
pub struct CliEngine<R: CommandRunner> {
    program: String,
    runner: R,
    /// Applies to inspection queries only. Pull, run, start and stop are
    /// long-running and are never cut short.
    query_timeout: Option<Duration>,
}

impl<R: CommandRunner> CliEngine<R> {
    pub fn new(program: impl Into<String>, runner: R, query_timeout: Option<Duration>) -> Self {
        Self {
            program: program.into(),
            runner,
            query_timeout,
        }
    }

    /// The runner every engine command goes through.
    #[must_use]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run an inspection command and return its trimmed stdout.
    async fn query(&self, args: &[&str]) -> Result<String, EngineError> {
        let stdout = self.invoke(args, self.query_timeout).await?;
        Ok(stdout.trim().to_string())
    }

    /// Run a state-changing command; its output is discarded.
    async fn execute(&self, args: &[&str]) -> Result<(), EngineError> {
        self.invoke(args, None).await.map(drop)
    }

    async fn invoke(&self, args: &[&str], timeout: Option<Duration>) -> Result<String, EngineError> {
        debug!(program = %self.program, ?args, "running engine command");
        let output = match timeout {
            Some(timeout) => {
                self.runner
                    .run_with_timeout(&self.program, args, timeout)
                    .await
            }
            None => self.runner.run(&self.program, args).await,
        }
        .map_err(|e| EngineError::Unavailable {
            program: self.program.clone(),
            reason: format!("{e:#}"),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                match output.status.code() {
                    Some(code) => format!("exited with status {code}"),
                    None => "terminated by a signal".to_string(),
                }
            } else {
                stderr
            };
            debug!(program = %self.program, ?args, %detail, "engine command failed");
            return Err(EngineError::CommandFailed {
                command: self.command_line(args),
                detail,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Human-readable rendering of an invocation, for error messages only.
    fn command_line(&self, args: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl CliEngine<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.program.clone(),
            TokioCommandRunner::new(),
            config.query_timeout(),
        )
    }
}

/// `ps` filter selecting containers by name.
fn name_filter(container_name: &str) -> String {
    format!("name={container_name}")
}

/// Argument vector for `run`: name, one `-e KEY=VALUE` pair per environment
/// entry, a `port:port` mapping, detached, image last.
#[must_use]
pub fn run_args(spec: &RunSpec<'_>) -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        "--name".to_string(),
        spec.container_name.to_string(),
    ];
    for (key, value) in spec.environment.iter() {
        args.push("-e".to_string());
        args.push(format!("{key}={value}"));
    }
    args.push("-p".to_string());
    args.push(format!("{port}:{port}", port = spec.port));
    args.push("-d".to_string());
    args.push(spec.image.to_string());
    args
}

impl<R: CommandRunner> ImageStore for CliEngine<R> {
    async fn image_exists(&self, image: &str) -> Result<bool, EngineError> {
        Ok(!self.query(&["images", "-q", image]).await?.is_empty())
    }

    async fn pull_image(&self, image: &str) -> Result<(), EngineError> {
        self.execute(&["pull", image]).await
    }
}

impl<R: CommandRunner> ContainerInspector for CliEngine<R> {
    async fn container_running(&self, container_name: &str) -> Result<bool, EngineError> {
        let filter = name_filter(container_name);
        Ok(!self.query(&["ps", "-q", "-f", &filter]).await?.is_empty())
    }

    async fn container_exists(&self, container_name: &str) -> Result<bool, EngineError> {
        let filter = name_filter(container_name);
        Ok(!self.query(&["ps", "-aq", "-f", &filter]).await?.is_empty())
    }
}

impl<R: CommandRunner> ContainerLifecycle for CliEngine<R> {
    async fn run_container(&self, spec: &RunSpec<'_>) -> Result<(), EngineError> {
        let args = run_args(spec);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.execute(&args).await
    }

    async fn start_container(&self, container_name: &str) -> Result<(), EngineError> {
        self.execute(&["start", container_name]).await
    }

    async fn stop_container(&self, container_name: &str) -> Result<(), EngineError> {
        self.execute(&["stop", container_name]).await
    }
}
