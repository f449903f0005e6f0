//! Application layer — port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain` — never on `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod explorer;
pub mod ports;
pub mod services;

pub use explorer::ServiceExplorer;
pub use ports::{
    CommandRunner, ConfigStore, ContainerEngine, ContainerInspector, ContainerLifecycle, ImageStore,
    ProgressReporter, RunSpec, SilentReporter,
};
