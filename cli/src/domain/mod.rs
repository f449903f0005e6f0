//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod action;
pub mod catalog;
pub mod config;
pub mod error;

pub use action::{ActionOutcome, ActionReport, LifecycleAction};
pub use catalog::{Catalog, validate_definition};
pub use config::{DevsvcConfig, EngineConfig, validate_config};
pub use error::{CatalogError, ConfigError, EngineError};
