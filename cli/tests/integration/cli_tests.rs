//! CLI structure, argument parsing, and read-only commands.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Engine program that cannot be spawned on any test machine.
pub const MISSING_ENGINE: &str = "devsvc-test-no-such-engine";

pub fn devsvc() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("devsvc"));
    cmd.env("NO_COLOR", "1")
        .env("DEVSVC_ENGINE", MISSING_ENGINE)
        .env("DEVSVC_CONFIG", "/nonexistent/devsvc/config.yaml")
        .env_remove("DEVSVC_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("run devsvc");
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// --- Help and version ---

#[test]
fn test_cli_no_args_shows_help() {
    devsvc().assert().code(2).stderr(predicate::str::contains(
        "Inspect and control local development service containers",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    let output = devsvc().arg("--help").output().expect("run devsvc");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["list", "status", "catalog", "pull", "start", "stop", "watch", "config"] {
        assert!(stdout.contains(name), "help is missing `{name}`:\n{stdout}");
    }
}

#[test]
fn test_version_command_shows_version() {
    devsvc()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "devsvc {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json() {
    let v = stdout_json(devsvc().args(["version", "--json"]));
    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_version_ignores_broken_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "engine: [not, a, map]\n").expect("write");
    devsvc()
        .env("DEVSVC_CONFIG", &path)
        .arg("version")
        .assert()
        .success();
}

// --- Catalog ---

#[test]
fn test_catalog_lists_builtin_services() {
    devsvc()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("mssql"))
        .stdout(predicate::str::contains("postgres:latest"))
        .stdout(predicate::str::contains("mariadb"))
        .stdout(predicate::str::contains("6379"));
}

#[test]
fn test_catalog_json_is_definition_array() {
    let v = stdout_json(devsvc().args(["catalog", "--json"]));
    let services = v.as_array().expect("array");
    assert_eq!(services.len(), 4);
    assert_eq!(services[1]["name"], "postgres");
    assert_eq!(services[1]["container_name"], "postgres-devcontainer");
    assert_eq!(services[1]["environment"]["POSTGRES_DB"], "devcontainer_db");
    assert_eq!(services[3]["service_type"], "cache");
    assert!(services[3].get("username").is_none());
}

#[test]
fn test_catalog_json_keeps_environment_declaration_order() {
    let output = devsvc().args(["catalog", "--json"]).output().expect("run");
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let password = stdout.find("POSTGRES_PASSWORD").expect("password key");
    let database = stdout.find("POSTGRES_DB").expect("database key");
    assert!(password < database, "got: {stdout}");
}

#[test]
fn test_catalog_ignores_broken_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "engine: [not, a, map]\n").expect("write");
    devsvc()
        .env("DEVSVC_CONFIG", &path)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("redis"));
}

// --- List / status with an unreachable engine ---

#[test]
fn test_list_with_unreachable_engine_shows_everything_stopped() {
    devsvc()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Databases"))
        .stdout(predicate::str::contains("Caches"))
        .stdout(predicate::str::contains("Stopped"))
        .stdout(predicate::str::contains("Image not pulled").not());
}

#[test]
fn test_list_json_tree_shape() {
    let v = stdout_json(devsvc().args(["list", "--json"]));
    let groups = v["groups"].as_array().expect("groups");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["label"], "Databases");
    assert_eq!(groups[0]["service_type"], "database");

    let postgres = &groups[0]["services"][1];
    assert_eq!(postgres["definition"]["name"], "postgres");
    assert_eq!(postgres["status"], "stopped");
    assert_eq!(postgres["presentation"]["icon"], "circle-outline");
    assert_eq!(postgres["details"][0]["label"], "Port");
    assert_eq!(postgres["details"][0]["value"], "5432");

    let redis = &groups[1]["services"][0];
    assert_eq!(redis["details"].as_array().expect("details").len(), 1);
}

#[test]
fn test_status_single_service() {
    devsvc()
        .args(["status", "redis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Redis"))
        .stdout(predicate::str::contains("PostgreSQL").not());
}

#[test]
fn test_status_json_array() {
    let v = stdout_json(devsvc().args(["status", "--json"]));
    let services = v.as_array().expect("array");
    assert_eq!(services.len(), 4);
    assert!(services.iter().all(|s| s["status"] == "stopped"));
}

#[test]
fn test_status_unknown_service_lists_valid_names() {
    devsvc()
        .args(["status", "mongo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown service: mongo"))
        .stderr(predicate::str::contains("mssql, postgres, mariadb, redis"));
}

#[test]
fn test_status_unknown_service_json_error_object() {
    let output = devsvc()
        .args(["status", "mongo", "--json"])
        .output()
        .expect("run devsvc");
    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(v["error"], true);
    assert_eq!(v["code"], "unknown_service");
}

#[test]
fn test_verbose_logs_engine_commands_to_stderr() {
    devsvc()
        .args(["-v", "status", "redis"])
        .assert()
        .success()
        .stderr(predicate::str::contains("running engine command"));
}
