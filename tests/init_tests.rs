//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::habitual_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    habitual_cmd().arg("init").arg(temp.path()).assert().success();

    assert!(temp.path().join(".habitual").is_dir());
    assert!(temp.path().join(".habitual/store").is_dir());

    let content = fs::read_to_string(temp.path().join(".habitual/config.toml")).unwrap();
    assert!(content.contains("persona = \"supportive\""));
    assert!(content.contains("default_time = \"08:00\""));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    habitual_cmd().arg("init").arg(temp.path()).assert().success();
    habitual_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_commands_outside_workspace_fail() {
    let temp = TempDir::new().unwrap();

    habitual_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("habitual init"));
}

#[test]
fn test_root_env_selects_workspace() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    habitual_cmd().arg("init").arg(temp.path()).assert().success();

    habitual_cmd()
        .current_dir(elsewhere.path())
        .env("HABITUAL_ROOT", temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning Meditation"));
}

#[test]
fn test_config_set_and_get_persona() {
    let temp = TempDir::new().unwrap();

    habitual_cmd().arg("init").arg(temp.path()).assert().success();

    habitual_cmd()
        .current_dir(temp.path())
        .args(["config", "persona", "strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set persona = strict"));

    habitual_cmd()
        .current_dir(temp.path())
        .args(["config", "persona"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strict"));
}

#[test]
fn test_config_invalid_persona_suggests_values() {
    let temp = TempDir::new().unwrap();

    habitual_cmd().arg("init").arg(temp.path()).assert().success();

    habitual_cmd()
        .current_dir(temp.path())
        .args(["config", "persona", "grumpy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid personas"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    habitual_cmd().arg("init").arg(temp.path()).assert().success();

    habitual_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("persona = supportive"))
        .stdout(predicate::str::contains("default_mood = neutral"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();

    habitual_cmd().arg("init").arg(temp.path()).assert().success();

    habitual_cmd()
        .current_dir(temp.path())
        .args(["config", "color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'color'"));
}
