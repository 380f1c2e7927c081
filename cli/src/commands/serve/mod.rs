//! # Hestia HTTP Server
//!
//! File: cli/src/commands/serve/mod.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! `hestia serve` exposes the assistant over HTTP: the FAQ, the quick
//! responses, the matcher and the connectivity indicator as a small JSON
//! API, plus an optional directory holding a front-end bundle.
//!
//! ## Architecture
//!
//! - `config.rs`: merges `serve` flags over the `[server]` configuration
//!   section and validates the static directory.
//! - `api.rs`: the JSON handlers and their shared `AppState`.
//! - `server_logic.rs`: router assembly, port fallback, graceful shutdown.
//!
//! ## Examples
//!
//! ```bash
//! # API only, on the configured port (8000 by default)
//! hestia serve
//!
//! # API plus a built front-end, reachable from the LAN
//! hestia serve --host 0.0.0.0 --port 9000 ./dist
//! ```
//!
//! Startup flow:
//! 1. Load configuration and merge the command-line flags over it
//! 2. Start the connectivity prober unless `--offline`
//! 3. Find an available port, starting from the requested one
//! 4. Serve until Ctrl+C or SIGTERM
//!
use crate::common::network::connectivity::{start_prober, ConnectivityMonitor};
use crate::core::config::load_config;
use crate::core::error::Result;
use crate::knowledge::{KnowledgeBase, Matcher};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub use config::ServeArgs;

pub mod api;
pub mod config;
pub mod server_logic;

/// # Handle Serve Command (`handle_serve`)
///
/// Entry point for `hestia serve`. Follows the startup flow above and
/// stops the connectivity prober once the server has shut down.
///
/// ## Arguments
///
/// * `args` - Parsed `serve` flags.
/// * `config_dir` - `--config-dir` override for the user configuration.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` after a graceful shutdown.
///
/// ## Errors
///
/// Configuration or static directory problems, an invalid probe address,
/// or any failure from `server_logic::run_server`.
pub async fn handle_serve(args: ServeArgs, config_dir: Option<&Path>) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);
    let cfg = load_config(config_dir)?;
    let server_config = config::resolve_server_config(&args, &cfg.server).await?;
    info!("Effective server config: {:?}", server_config);

    // Awaits the first probe so /api/status is accurate from the first request.
    let monitor = ConnectivityMonitor::global();
    let prober = start_prober(&cfg.connectivity, args.offline, &monitor).await?;

    let state = api::AppState {
        matcher: Matcher::new(Arc::new(KnowledgeBase::department())),
        connectivity: monitor,
    };
    let result = server_logic::run_server(server_config, state).await;

    if let Some(handle) = prober {
        handle.abort();
    }
    result
}
