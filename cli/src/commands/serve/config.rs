//! # Hestia Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Produces the effective `ServerConfig` for `hestia serve`. Settings come
//! from, in order of precedence:
//! 1. Command-line flags
//! 2. The `[server]` section of the loaded configuration
//!    (`core::config`, user and project files)
//! 3. Default values
//!
//! The static directory, when one is given, is resolved to an absolute
//! canonical path and must be an existing directory.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 9000
//! enable_cors = false
//! directory = "~/hestia/dist"
//! ```
//!
use crate::core::config::ServerSection;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::env;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Directory with a front-end bundle to serve next to the API.
    /// Overrides `server.directory` from the configuration.
    pub directory: Option<PathBuf>,

    /// Port to listen on; the next ports are tried if it is busy.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Address to bind. Use `0.0.0.0` to accept connections from the network.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Do not send CORS headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Do not probe connectivity; `/api/status` reports offline.
    #[arg(long)]
    pub offline: bool,
}

/// Effective settings for one server run.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Canonical path of the static directory, if any.
    pub directory: Option<PathBuf>,
    pub enable_cors: bool,
}

impl ServerConfig {
    fn from_section(section: &ServerSection) -> Self {
        Self {
            host: section.host,
            port: section.port,
            directory: section.directory.as_ref().map(PathBuf::from),
            enable_cors: section.enable_cors,
        }
    }

    fn apply_args(&mut self, args: &ServeArgs) {
        if let Some(host) = args.host {
            self.host = host;
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(directory) = &args.directory {
            self.directory = Some(directory.clone());
        }
        if args.no_cors {
            self.enable_cors = false;
        }
    }
}

/// # Resolve Server Configuration (`resolve_server_config`)
///
/// Layers the `serve` flags over the `[server]` section and resolves the
/// static directory, if one ends up configured.
///
/// ## Arguments
///
/// * `args` - Parsed `serve` flags; only the ones given override.
/// * `section` - The merged `[server]` configuration section.
///
/// ## Returns
///
/// * `Result<ServerConfig>` - Effective settings, with `directory` made
///   absolute and canonical.
///
/// ## Errors
///
/// Returns an error if the directory does not exist, cannot be read, or is
/// not a directory.
pub async fn resolve_server_config(args: &ServeArgs, section: &ServerSection) -> Result<ServerConfig> {
    let mut config = ServerConfig::from_section(section);
    config.apply_args(args);
    if let Some(directory) = config.directory.take() {
        config.directory = Some(resolve_directory(&directory).await?);
    }
    Ok(config)
}

/// Makes `dir` absolute, canonicalizes it and checks it is a directory.
async fn resolve_directory(dir: &Path) -> Result<PathBuf> {
    let absolute_path = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()
            .context("Failed to get current working directory")?
            .join(dir)
    };

    let canonical_path = tokio::fs::canonicalize(&absolute_path)
        .await
        .with_context(|| {
            format!(
                "Directory '{}' could not be found or accessed",
                absolute_path.display()
            )
        })?;
    let metadata = tokio::fs::metadata(&canonical_path)
        .await
        .with_context(|| format!("Failed to get metadata for '{}'", canonical_path.display()))?;
    if !metadata.is_dir() {
        anyhow::bail!("Path is not a directory: {}", canonical_path.display());
    }
    debug!("Resolved serving directory to: {}", canonical_path.display());
    Ok(canonical_path)
}
