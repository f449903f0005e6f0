//! Unit tests for the devsvc CLI library
//!
//! These tests drive the application layer against an in-memory engine and
//! run fast without spawning any container tooling.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod helpers;
mod property_tests;
