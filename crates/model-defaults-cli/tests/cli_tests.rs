//! Integration tests for the model-defaults binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a Command for the model-defaults binary
fn defaults_cmd() -> Command {
    let mut cmd = Command::cargo_bin("model-defaults").expect("Failed to find model-defaults binary");
    cmd.env_remove("MODEL_DEFAULTS_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0");
    cmd
}

fn write_definitions(temp: &TempDir) {
    fs::write(
        temp.path().join("topology.properties"),
        "{boolean}.Server.SSL.Enabled = false\nServer.Mode = legacy, LEGACY\n",
    )
    .unwrap();
    fs::write(temp.path().join("resources.properties"), "").unwrap();
    fs::write(temp.path().join("appDeployments.properties"), "").unwrap();
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    defaults_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("attribute defaults"));
}

#[test]
fn test_no_command_shows_hint() {
    defaults_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("bundled definitions"))
        .stdout(predicate::str::contains("model-defaults --help"));
}

// ============================================================================
// folders / lookup
// ============================================================================

#[test]
fn test_folders_lists_bundled_folders() {
    defaults_cmd()
        .arg("folders")
        .assert()
        .success()
        .stdout(predicate::str::contains("topology.Server.SSL"))
        .stdout(predicate::str::contains("resources.JMSServer"))
        .stdout(predicate::str::contains("appDeployments.Application"));
}

#[test]
fn test_folders_json() {
    let output = defaults_cmd().args(["folders", "--json"]).output().unwrap();
    assert!(output.status.success());

    let folders: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(folders.iter().any(|f| f == "topology.Server"));
}

#[test]
fn test_lookup_shows_attributes() {
    defaults_cmd()
        .args(["lookup", "topology.Server.SSL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabled"))
        .stdout(predicate::str::contains("boolean"));
}

#[test]
fn test_lookup_unknown_folder() {
    defaults_cmd()
        .args(["lookup", "nonexistent.path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No defaults registered"));
}

#[test]
fn test_lookup_json() {
    let output = defaults_cmd()
        .args(["lookup", "topology.Server.SSL", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["attributes"]["Enabled"]["values"][0], "false");
}

// ============================================================================
// match / is-default
// ============================================================================

#[test]
fn test_match_omitted_default() {
    defaults_cmd()
        .args(["match", "topology.Server.SSL", "Enabled", "--actual", "false"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("match"));
}

#[test]
fn test_match_boolean_aliases() {
    defaults_cmd()
        .args(["match", "any.folder", "Flag", "--expected", "true", "--actual", "1"])
        .assert()
        .success();
}

#[test]
fn test_mismatch_exits_with_two() {
    defaults_cmd()
        .args(["match", "topology.Server.SSL", "Enabled", "--expected", "true"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("mismatch"));
}

#[test]
fn test_match_json_values() {
    defaults_cmd()
        .args([
            "match",
            "topology.Server",
            "ListenPort",
            "--expected",
            "7001",
            "--json-values",
        ])
        .assert()
        .success();
}

#[test]
fn test_invalid_boolean_literal_fails() {
    defaults_cmd()
        .args(["match", "topology.Server.SSL", "Enabled", "--expected", "maybe", "--actual", "false"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid boolean value: maybe"));
}

#[test]
fn test_invalid_json_value_fails() {
    defaults_cmd()
        .args(["is-default", "topology.Server", "ListenPort", "{oops", "--json-values"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid JSON value"));
}

#[test]
fn test_is_default() {
    defaults_cmd()
        .args(["is-default", "topology.Server.SSL", "Enabled", "0"])
        .assert()
        .success();

    defaults_cmd()
        .args(["is-default", "topology.Server.SSL", "Enabled", "1"])
        .assert()
        .code(2);
}

// ============================================================================
// Definition sources
// ============================================================================

#[test]
fn test_definitions_dir_flag() {
    let temp = TempDir::new().unwrap();
    write_definitions(&temp);

    defaults_cmd()
        .args(["match", "topology.Server", "Mode", "--expected", "legacy", "--actual", "LEGACY"])
        .arg("--definitions-dir")
        .arg(temp.path())
        .assert()
        .success();
}

#[test]
fn test_definitions_dir_from_env() {
    let temp = TempDir::new().unwrap();
    write_definitions(&temp);

    defaults_cmd()
        .env("MODEL_DEFAULTS_DIR", temp.path())
        .args(["folders", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("topology.Server.SSL"))
        .stdout(predicate::str::contains("resources.JMSServer").not());
}

#[test]
fn test_config_file() {
    let temp = TempDir::new().unwrap();
    write_definitions(&temp);
    let config = temp.path().join("model-defaults.toml");
    fs::write(&config, "[definitions]\ndir = \".\"\nroots = [\"topology\"]\n").unwrap();

    defaults_cmd()
        .arg("--config")
        .arg(&config)
        .args(["folders", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("topology.Server"));
}

#[test]
fn test_missing_definitions_dir_fails() {
    let temp = TempDir::new().unwrap();

    defaults_cmd()
        .arg("--definitions-dir")
        .arg(temp.path().join("absent"))
        .arg("folders")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn test_malformed_definitions_fail() {
    let temp = TempDir::new().unwrap();
    write_definitions(&temp);
    fs::write(temp.path().join("resources.properties"), "JMSServer. = 1\n").unwrap();

    defaults_cmd()
        .arg("--definitions-dir")
        .arg(temp.path())
        .arg("folders")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid defaults key"));
}
