//! Command implementations

pub mod catalog;
pub mod config;
pub mod lifecycle;
pub mod list;
pub mod status;
pub mod version;
pub mod watch;
