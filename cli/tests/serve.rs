//! # Hestia CLI Serve Integration Tests
//!
//! File: cli/tests/serve.rs
//! Author: Group AUZA
//!
//! Only startup validation is exercised here; the routes themselves are
//! covered by the router tests in `commands::serve`.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_serve_help() {
    hestia_cmd()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--no-cors"));
}

#[test]
fn test_serve_missing_directory_fails() {
    let sandbox = tempdir().unwrap();
    sandboxed_cmd(&sandbox)
        .args(["serve", "--offline", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be found"));
}
