//! pull / start / stop against an engine that cannot be reached.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::cli_tests::{MISSING_ENGINE, devsvc};

#[test]
fn test_pull_failure_names_service_and_engine() {
    devsvc()
        .args(["pull", "redis"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to pull Redis image"))
        .stderr(predicate::str::contains(MISSING_ENGINE));
}

#[test]
fn test_start_attempts_every_named_service() {
    devsvc()
        .args(["start", "postgres", "redis"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to start PostgreSQL"))
        .stderr(predicate::str::contains("Failed to start Redis"));
}

#[test]
fn test_stop_json_reports_per_service_errors() {
    let output = devsvc()
        .args(["stop", "mariadb", "--json"])
        .output()
        .expect("run devsvc");
    assert_eq!(output.status.code(), Some(1));

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    let reports = v.as_array().expect("array");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["service"], "mariadb");
    assert_eq!(reports[0]["action"], "stop");
    assert_eq!(reports[0]["error"], true);
    assert_eq!(reports[0]["code"], "engine_unavailable");
}

#[test]
fn test_unknown_service_fails_before_any_action() {
    devsvc()
        .args(["start", "redis", "mongo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown service: mongo"))
        .stderr(predicate::str::contains("Failed to start Redis").not());
}

#[test]
fn test_lifecycle_requires_a_service() {
    devsvc().arg("pull").assert().code(2);
}
