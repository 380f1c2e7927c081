//! # Hestia CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Group AUZA
//!
//! Top-level behavior of the `hestia` binary: standard flags, the command
//! list and argument errors.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut assert = hestia_cmd().arg("--help").assert().success();
    for command in ["ask", "chat", "faq", "install", "serve"] {
        assert = assert.stdout(predicate::str::contains(command));
    }
}

#[test]
fn test_version_flag() {
    hestia_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    hestia_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_subcommand_fails() {
    hestia_cmd().arg("bogus").assert().failure();
}
