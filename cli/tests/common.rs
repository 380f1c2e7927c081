//! # Hestia CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Shared helpers for the integration tests. Each `.rs` file in `cli/tests/`
//! is compiled as its own test crate and pulls this in with `mod common;`.
//!

#![allow(dead_code)]

pub use assert_cmd::Command;
use tempfile::TempDir;

/// `hestia` binary for the current test run.
pub fn hestia_cmd() -> Command {
    Command::cargo_bin("hestia").expect("Failed to find hestia binary for testing")
}

/// `hestia` isolated from the real user configuration: the config
/// directory and the working directory both point into `sandbox`.
pub fn sandboxed_cmd(sandbox: &TempDir) -> Command {
    let mut cmd = hestia_cmd();
    cmd.env("HESTIA_CONFIG_DIR", sandbox.path())
        .env_remove("RUST_LOG")
        .current_dir(sandbox.path());
    cmd
}
