//! # Hestia CLI Install Integration Tests
//!
//! File: cli/tests/install.rs
//! Author: Group AUZA
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_install_yes_writes_config() {
    let sandbox = tempdir().unwrap();
    sandboxed_cmd(&sandbox)
        .args(["install", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hestia installed"));

    let config = std::fs::read_to_string(sandbox.path().join("config.toml")).unwrap();
    assert!(config.contains("[assistant]"));

    sandboxed_cmd(&sandbox)
        .args(["install", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already installed"));
}

#[test]
fn test_install_prompt_dismissed() {
    let sandbox = tempdir().unwrap();
    sandboxed_cmd(&sandbox)
        .arg("install")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[y/N]"))
        .stdout(predicate::str::contains("Install dismissed."));
    assert!(!sandbox.path().join("config.toml").exists());
}

#[test]
fn test_install_prompt_accepted() {
    let sandbox = tempdir().unwrap();
    sandboxed_cmd(&sandbox)
        .arg("install")
        .write_stdin("y\n")
        .assert()
        .success();
    assert!(sandbox.path().join("config.toml").exists());
}

#[test]
fn test_installed_config_is_loadable() {
    let sandbox = tempdir().unwrap();
    sandboxed_cmd(&sandbox)
        .args(["install", "--yes"])
        .assert()
        .success();
    sandboxed_cmd(&sandbox)
        .args(["chat", "--no-splash", "--offline", "--delay-ms", "0"])
        .write_stdin("bye\n")
        .assert()
        .success();
}
