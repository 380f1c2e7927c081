//! # Hestia Install Affordance (`common::install`)
//!
//! File: cli/src/common/install.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Models the "Install" button: an eligibility event hands us a deferred
//! prompt, the button is shown while that prompt is held, and triggering it
//! runs the prompt and observes whether the user accepted or dismissed.
//!
//! ## Architecture
//!
//! - `InstallPrompt`: the platform side. Runs the actual prompt and reports
//!   an `InstallOutcome`. It may fail.
//! - `InstallAffordance<P>`: the state kept by the view.
//!     - `capture(prompt)`: eligibility event; the affordance becomes
//!       installable unless the app is already installed.
//!     - `mark_installed()`: the "installed" event; the affordance goes away.
//!     - `trigger()`: runs the held prompt. Accepted clears the affordance,
//!       Dismissed keeps it, and a failing prompt is logged and hides it.
//!       Failures never surface to the user as errors.
//! - `ConfigInstallPrompt`: the terminal implementation. Installing Hestia
//!   means writing the default user configuration file; the prompt asks
//!   `[y/N]` on stdin unless told to assume yes.
//!
use crate::core::config::DEFAULT_CONFIG_TOML;
use crate::core::error::{HestiaError, Result};
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

#[async_trait]
pub trait InstallPrompt: Send {
    async fn prompt(&mut self) -> Result<InstallOutcome>;
}

#[derive(Debug)]
pub struct InstallAffordance<P> {
    deferred: Option<P>,
    installed: bool,
}

impl<P: InstallPrompt> Default for InstallAffordance<P> {
    fn default() -> Self {
        Self {
            deferred: None,
            installed: false,
        }
    }
}

impl<P: InstallPrompt> InstallAffordance<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds on to `prompt` so it can be triggered later.
    pub fn capture(&mut self, prompt: P) {
        if self.installed {
            info!("Ignoring install eligibility: already installed.");
            return;
        }
        self.deferred = Some(prompt);
    }

    pub fn mark_installed(&mut self) {
        self.installed = true;
        self.deferred = None;
    }

    /// Whether the install button should be shown.
    pub fn is_installable(&self) -> bool {
        !self.installed && self.deferred.is_some()
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Runs the held prompt. Returns `None` when there is nothing to
    /// trigger or when the prompt failed.
    pub async fn trigger(&mut self) -> Option<InstallOutcome> {
        let prompt = self.deferred.as_mut()?;
        match prompt.prompt().await {
            Ok(InstallOutcome::Accepted) => {
                info!("Install prompt accepted.");
                self.mark_installed();
                Some(InstallOutcome::Accepted)
            }
            Ok(InstallOutcome::Dismissed) => {
                info!("Install prompt dismissed.");
                Some(InstallOutcome::Dismissed)
            }
            Err(e) => {
                warn!("Install prompt failed: {:#}", e);
                self.deferred = None;
                None
            }
        }
    }
}

impl InstallAffordance<ConfigInstallPrompt> {
    /// Affordance for installing the user configuration at `target`:
    /// already installed when the file exists, installable otherwise.
    pub fn for_config(target: PathBuf, assume_yes: bool) -> Self {
        let mut affordance = Self::new();
        if target.exists() {
            affordance.mark_installed();
        } else {
            affordance.capture(ConfigInstallPrompt::new(target, assume_yes));
        }
        affordance
    }
}

/// Installs the default user configuration file at `target`.
#[derive(Debug)]
pub struct ConfigInstallPrompt {
    target: PathBuf,
    assume_yes: bool,
}

impl ConfigInstallPrompt {
    pub fn new(target: PathBuf, assume_yes: bool) -> Self {
        Self { target, assume_yes }
    }

    async fn ask(&self) -> Result<bool> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(
                format!(
                    "Install Hestia's configuration to {}? [y/N] ",
                    self.target.display()
                )
                .as_bytes(),
            )
            .await?;
        stdout.flush().await?;

        let mut line = String::new();
        BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await
            .context("Failed to read install confirmation")?;
        Ok(is_yes(&line))
    }

    async fn write_config(&self) -> Result<()> {
        if self.target.exists() {
            anyhow::bail!(HestiaError::Install(format!(
                "{} already exists",
                self.target.display()
            )));
        }
        if let Some(parent) = self.target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        tokio::fs::write(&self.target, DEFAULT_CONFIG_TOML)
            .await
            .with_context(|| format!("Failed to write {}", self.target.display()))?;
        info!("Wrote default configuration to {}", self.target.display());
        Ok(())
    }
}

#[async_trait]
impl InstallPrompt for ConfigInstallPrompt {
    async fn prompt(&mut self) -> Result<InstallOutcome> {
        let accepted = self.assume_yes || self.ask().await?;
        if !accepted {
            return Ok(InstallOutcome::Dismissed);
        }
        self.write_config().await?;
        Ok(InstallOutcome::Accepted)
    }
}

/// Whether a `[y/N]` answer means yes.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
