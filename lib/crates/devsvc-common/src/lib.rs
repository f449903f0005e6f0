//! Shared service and view-model types for devsvc front-ends.

pub mod types;

pub use types::*;
