//! # Hestia Install Command
//!
//! File: cli/src/commands/install.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Installs Hestia for the current user by writing the default
//! configuration file. Eligible only while that file does not exist; a
//! second run reports that Hestia is already installed.
//!
//! ## Examples
//!
//! ```bash
//! hestia install          # asks [y/N]
//! hestia install --yes    # no question asked
//! hestia --config-dir /tmp/h install --yes
//! ```
//!
use crate::common::install::{InstallAffordance, InstallOutcome};
use crate::core::config;
use crate::core::error::{HestiaError, Result};
use clap::Parser;
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug)]
pub struct InstallArgs {
    /// Accept the install prompt without asking.
    #[arg(long, short)]
    pub yes: bool,
}

pub async fn handle_install(args: InstallArgs, config_dir: Option<&Path>) -> Result<()> {
    let target = config::user_config_path(config_dir).ok_or_else(|| {
        HestiaError::Install("could not determine a user configuration directory".to_string())
    })?;
    info!("Install target: {}", target.display());

    let mut affordance = InstallAffordance::for_config(target.clone(), args.yes);
    if affordance.is_installed() {
        println!("Hestia is already installed ({}).", target.display());
        return Ok(());
    }

    match affordance.trigger().await {
        Some(InstallOutcome::Accepted) => {
            println!("✅ Hestia installed. Configuration written to {}", target.display());
        }
        Some(InstallOutcome::Dismissed) => println!("Install dismissed."),
        None => println!("Install is not available right now. Run with -v for details."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_install_writes_then_reports_installed() -> Result<()> {
        let dir = tempdir()?;
        handle_install(InstallArgs { yes: true }, Some(dir.path())).await?;
        let written = dir.path().join("config.toml");
        assert_eq!(std::fs::read_to_string(&written)?, config::DEFAULT_CONFIG_TOML);

        // Second run leaves the file alone.
        std::fs::write(&written, "# edited")?;
        handle_install(InstallArgs { yes: true }, Some(dir.path())).await?;
        assert_eq!(std::fs::read_to_string(&written)?, "# edited");
        Ok(())
    }
}
