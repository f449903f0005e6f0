//! Shared test helpers: an in-memory container engine and output constructors.

#![allow(dead_code, clippy::expect_used)]

use std::collections::{HashMap, HashSet};
use std::process::{ExitStatus, Output};
use std::sync::Mutex;

use devsvc_cli::application::ports::{
    ContainerInspector, ContainerLifecycle, ImageStore, ProgressReporter, RunSpec,
};
use devsvc_cli::domain::{Catalog, EngineError};
use devsvc_common::ServiceDefinition;

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Catalog helpers ──────────────────────────────────────────────────────────

pub fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog is valid")
}

pub fn service(name: &str) -> ServiceDefinition {
    catalog().get(name).expect("known service").clone()
}

// ── In-memory engine ─────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct State {
    images: HashSet<String>,
    /// container name → running
    containers: HashMap<String, bool>,
    failing: HashSet<&'static str>,
    calls: Vec<String>,
}

/// Container engine that keeps images and containers in memory.
///
/// Operation names used for call logging and failure injection:
/// `images`, `pull`, `ps`, `ps -a`, `run`, `start`, `stop`.
#[derive(Debug, Default)]
pub struct FakeEngine {
    state: Mutex<State>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(self, image: &str) -> Self {
        self.lock().images.insert(image.to_string());
        self
    }

    pub fn with_container(self, name: &str, running: bool) -> Self {
        self.lock().containers.insert(name.to_string(), running);
        self
    }

    /// Make every call of `op` fail with an engine error.
    pub fn failing(self, op: &'static str) -> Self {
        self.lock().failing.insert(op);
        self
    }

    /// Calls in order, formatted as `"<op> <argument>"`.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn count_calls(&self, op: &str) -> usize {
        let prefix = format!("{op} ");
        self.lock()
            .calls
            .iter()
            .filter(|c| c.starts_with(&prefix))
            .count()
    }

    pub fn container_count(&self) -> usize {
        self.lock().containers.len()
    }

    pub fn is_running(&self, name: &str) -> bool {
        self.lock().containers.get(name).copied().unwrap_or(false)
    }

    pub fn has_image(&self, image: &str) -> bool {
        self.lock().images.contains(image)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("fake engine lock")
    }

    fn record(&self, op: &'static str, arg: &str) -> Result<(), EngineError> {
        let mut state = self.lock();
        state.calls.push(format!("{op} {arg}"));
        if state.failing.contains(op) {
            return Err(EngineError::CommandFailed {
                command: format!("fake {op} {arg}"),
                detail: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

fn no_such_container(op: &str, name: &str) -> EngineError {
    EngineError::CommandFailed {
        command: format!("fake {op} {name}"),
        detail: format!("Error response from daemon: No such container: {name}"),
    }
}

impl ImageStore for FakeEngine {
    async fn image_exists(&self, image: &str) -> Result<bool, EngineError> {
        self.record("images", image)?;
        Ok(self.lock().images.contains(image))
    }

    async fn pull_image(&self, image: &str) -> Result<(), EngineError> {
        self.record("pull", image)?;
        self.lock().images.insert(image.to_string());
        Ok(())
    }
}

impl ContainerInspector for FakeEngine {
    async fn container_running(&self, container_name: &str) -> Result<bool, EngineError> {
        self.record("ps", container_name)?;
        Ok(self.lock().containers.get(container_name) == Some(&true))
    }

    async fn container_exists(&self, container_name: &str) -> Result<bool, EngineError> {
        self.record("ps -a", container_name)?;
        Ok(self.lock().containers.contains_key(container_name))
    }
}

impl ContainerLifecycle for FakeEngine {
    async fn run_container(&self, spec: &RunSpec<'_>) -> Result<(), EngineError> {
        self.record("run", spec.container_name)?;
        let mut state = self.lock();
        if state.containers.contains_key(spec.container_name) {
            return Err(EngineError::CommandFailed {
                command: format!("fake run {}", spec.container_name),
                detail: format!(
                    "Conflict. The container name \"/{}\" is already in use",
                    spec.container_name
                ),
            });
        }
        // `run` pulls a missing image implicitly.
        state.images.insert(spec.image.to_string());
        state.containers.insert(spec.container_name.to_string(), true);
        Ok(())
    }

    async fn start_container(&self, container_name: &str) -> Result<(), EngineError> {
        self.record("start", container_name)?;
        match self.lock().containers.get_mut(container_name) {
            Some(running) => {
                *running = true;
                Ok(())
            }
            None => Err(no_such_container("start", container_name)),
        }
    }

    async fn stop_container(&self, container_name: &str) -> Result<(), EngineError> {
        self.record("stop", container_name)?;
        match self.lock().containers.get_mut(container_name) {
            Some(running) => {
                *running = false;
                Ok(())
            }
            None => Err(no_such_container("stop", container_name)),
        }
    }
}

// ── Recording reporter ───────────────────────────────────────────────────────

/// Reporter that remembers every event as `"step: ..."` / `"success: ..."`.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("reporter lock").clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.events
            .lock()
            .expect("reporter lock")
            .push(format!("step: {message}"));
    }

    fn success(&self, message: &str) {
        self.events
            .lock()
            .expect("reporter lock")
            .push(format!("success: {message}"));
    }
}
