//! # Hestia HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Assembles the axum application and runs it:
//! - the JSON API from `api.rs`
//! - the optional static front-end, with unknown paths falling back to its
//!   `index.html` so client-side routes keep working
//! - request tracing and CORS layers from `tower-http`
//! - port fallback when the requested port is taken
//! - graceful shutdown on Ctrl+C or SIGTERM
//!
//! ## Routing order
//!
//! Requests are matched against the API routes first. Anything under `/api`
//! that no handler claims gets a JSON 404 from `api::router`, so a typo in an
//! API path never comes back as the front-end's `index.html`. Only then does
//! the static directory (if any) see the request.
//!
use super::api::{self, AppState};
use super::config::ServerConfig;
use crate::core::error::{HestiaError, Result};
use anyhow::Context;
use axum::Router;
use std::net::{IpAddr, SocketAddr, UdpSocket};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// Starts the Hestia HTTP server and serves until a shutdown signal arrives.
///
/// ## Process:
/// 1. Finds an available port with `find_available_port`, starting from
///    `config.port`.
/// 2. Builds the application with `create_app`.
/// 3. Prints the startup banner (API URL, LAN URL when bound to all
///    interfaces, static directory, CORS status).
/// 4. Binds a `TcpListener` and runs `axum::serve` with graceful shutdown
///    driven by `shutdown_signal`.
///
/// ## Arguments
///
/// * `config`: The effective `ServerConfig` from `resolve_server_config`.
/// * `state`: Shared handler state (matcher and connectivity monitor).
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` once the server has shut down cleanly.
///
/// ## Errors
///
/// - No free port within `MAX_PORT_ATTEMPTS` of the requested one.
/// - Binding the listener fails (for example, permission denied).
/// - The server itself stops with an I/O error (`HestiaError::Server`).
pub async fn run_server(config: ServerConfig, state: AppState) -> Result<()> {
    // 1. Pick the port; the listener is bound again below.
    let addr = find_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;
    // 2. Build the router with its layers.
    let app = create_app(&config, state);

    // 3. Banner.

    println!("\n=================================================================");
    println!("🏨 Hestia API:        http://localhost:{}/api/health", addr.port());
    if config.host.is_unspecified() {
        if let Some(ip) = local_ip() {
            println!("🔗 Network URL:       http://{}:{}", ip, addr.port());
        }
    }
    match &config.directory {
        Some(directory) => println!("📂 Front-end from:    {}", directory.display()),
        None => println!("📂 Front-end:         (none, API only)"),
    }
    println!("⚙️  Binding to address: {}", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");

    info!("Starting server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    // 4. Bind and serve until Ctrl+C or SIGTERM.

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HestiaError::Server(e.to_string()))?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Completes on Ctrl+C, or SIGTERM on Unix. Passed to
/// `with_graceful_shutdown` so in-flight requests finish before exit.
/// If a handler cannot be installed the error is logged and that branch
/// never completes.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Returns the first address from `start_port` upwards that can be bound,
/// trying at most `max_attempts` ports.
async fn find_available_port(host: IpAddr, start_port: u16, max_attempts: u8) -> Result<SocketAddr> {
    let mut current_port = start_port;
    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, using port {} instead.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable ({}). Trying next port...",
                    attempt + 1,
                    current_port,
                    host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(port) => port,
                    None => break,
                };
            }
        }
    }

    anyhow::bail!(HestiaError::Server(format!(
        "no available port on host {} starting from {} after {} attempts",
        host, start_port, max_attempts
    )))
}

/// # Create Axum Application (`create_app`)
///
/// Builds the full `Router`: the JSON API, the optional static front-end
/// with its `index.html` fallback for client-side routes, and the tracing
/// and CORS middleware.
///
/// ## Arguments
///
/// * `config`: Supplies the static directory and whether CORS is enabled.
/// * `state`: Handed to the API handlers.
///
/// ## Returns
///
/// * `Router`: Ready to be served. With CORS disabled no
///   `Access-Control-*` headers are ever sent.
fn create_app(config: &ServerConfig, state: AppState) -> Router {
    // CorsLayer::new() allows nothing and adds no headers.
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // API routes, including its own /api 404, take precedence over static files.
    let mut app = api::router(state);
    if let Some(directory) = &config.directory {
        let spa_index = ServeFile::new(directory.join("index.html"));
        let static_files = ServeDir::new(directory)
            .append_index_html_on_directories(true)
            .fallback(spa_index);
        app = app.fallback_service(static_files);
    }

    app.layer(ServiceBuilder::new().layer(trace_layer).layer(cors_layer))
}

/// Best-effort LAN address for the startup banner. Connecting a UDP socket
/// sends nothing; it only selects the outgoing interface.
fn local_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    let ip = socket.local_addr().ok()?.ip();
    (!ip.is_loopback()).then_some(ip)
}
