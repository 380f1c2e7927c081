//! # Hestia Connectivity Indicator
//!
//! File: cli/src/common/network/connectivity.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Tracks whether the machine currently looks online, for the indicator in
//! the chat header and the `/api/status` endpoint. Hestia never needs the
//! network to answer; this state is purely informational.
//!
//! ## Architecture
//!
//! - `ConnectivityMonitor` is process-wide observable state backed by a
//!   `tokio::sync::watch` channel. `ConnectivityMonitor::global()` returns the
//!   shared instance.
//! - `subscribe()` hands out a `Subscription` guard. Dropping the guard
//!   unsubscribes, so a view that subscribes when it starts and drops the
//!   guard when it ends cannot leak a listener.
//! - `spawn_prober` runs a background task that periodically tries a TCP
//!   connection to a configured address and publishes the result.
//! - `start_prober` is the entry point used by `chat` and `serve`. It runs
//!   one probe inline and publishes it before spawning the background task,
//!   so the first header or status response already shows the real state.
//!
//! ## Examples
//!
//! ```rust
//! let monitor = ConnectivityMonitor::global();
//! let _prober = start_prober(&cfg.connectivity, false, &monitor).await?;
//! let mut sub = monitor.subscribe();
//! while let Some(state) = sub.changed().await {
//!     println!("Now {}", state);
//! }
//! ```
//!
use crate::core::config::ConnectivityConfig;
use crate::core::error::Result;
use anyhow::Context;
use serde::Serialize;
use std::fmt;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    Online,
    Offline,
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connectivity::Online => write!(f, "Online"),
            Connectivity::Offline => write!(f, "Offline"),
        }
    }
}

#[derive(Debug)]
pub struct ConnectivityMonitor {
    sender: watch::Sender<Connectivity>,
    subscribers: Arc<AtomicUsize>,
}

static GLOBAL_MONITOR: OnceLock<Arc<ConnectivityMonitor>> = OnceLock::new();

impl ConnectivityMonitor {
    /// # New Monitor (`new`)
    ///
    /// Creates a standalone monitor holding `initial`. The application uses
    /// `global()`; separate instances are for tests and embedding.
    ///
    /// ## Arguments
    ///
    /// * `initial` - The state reported until the first `set`.
    ///
    /// ## Returns
    ///
    /// * `ConnectivityMonitor` - A monitor with no subscribers.
    pub fn new(initial: Connectivity) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender,
            subscribers: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The process-wide monitor. Starts out `Offline` until a probe
    /// reports otherwise.
    pub fn global() -> Arc<ConnectivityMonitor> {
        GLOBAL_MONITOR
            .get_or_init(|| Arc::new(ConnectivityMonitor::new(Connectivity::Offline)))
            .clone()
    }

    pub fn current(&self) -> Connectivity {
        *self.sender.borrow()
    }

    /// Publishes `state`. Subscribers are only woken when it differs from
    /// the current value.
    pub fn set(&self, state: Connectivity) {
        let changed = self.sender.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
        if changed {
            info!("Connectivity changed: {}", state);
        }
    }

    pub fn subscribe(&self) -> Subscription {
        let count = self.subscribers.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Connectivity subscriber added ({} active)", count);
        Subscription {
            receiver: self.sender.subscribe(),
            subscribers: Arc::clone(&self.subscribers),
        }
    }

    #[allow(dead_code)] // Only the tests inspect the live count for now.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.load(Ordering::SeqCst)
    }
}

/// Live registration with a `ConnectivityMonitor`; unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription {
    receiver: watch::Receiver<Connectivity>,
    subscribers: Arc<AtomicUsize>,
}

impl Subscription {
    pub fn current(&self) -> Connectivity {
        *self.receiver.borrow()
    }

    /// Waits for the next change. Returns `None` once the monitor is gone.
    pub async fn changed(&mut self) -> Option<Connectivity> {
        self.receiver.changed().await.ok()?;
        Some(*self.receiver.borrow_and_update())
    }

    /// Returns the new state if it changed since last seen, without waiting.
    #[allow(dead_code)] // The REPL waits with `changed`; kept for non-async callers.
    pub fn poll_change(&mut self) -> Option<Connectivity> {
        match self.receiver.has_changed() {
            Ok(true) => Some(*self.receiver.borrow_and_update()),
            _ => None,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let remaining = self.subscribers.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!("Connectivity subscriber removed ({} active)", remaining);
    }
}

/// One connectivity check: can a TCP connection to `addr` be opened within
/// `timeout`? Any failure means `Offline`.
pub async fn probe(addr: SocketAddr, timeout: Duration) -> Connectivity {
    match tokio::time::timeout(timeout, TcpStream::connect(addr)).await {
        Ok(Ok(_stream)) => Connectivity::Online,
        Ok(Err(e)) => {
            debug!("Connectivity probe to {} failed: {}", addr, e);
            Connectivity::Offline
        }
        Err(_) => {
            debug!("Connectivity probe to {} timed out after {:?}", addr, timeout);
            Connectivity::Offline
        }
    }
}

/// Probes `addr` immediately and then every `interval`, publishing each
/// result to `monitor`. Abort the returned handle to stop probing.
pub fn spawn_prober(
    monitor: Arc<ConnectivityMonitor>,
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            monitor.set(probe(addr, timeout).await);
        }
    })
}

/// # Start Prober (`start_prober`)
///
/// Starts connectivity probing as configured, or pins the monitor to
/// `Offline` when probing is disabled by `offline` or by the configuration.
///
/// One probe runs inline and its result is published before the background
/// task is spawned, so callers can render the indicator right away.
///
/// ## Arguments
///
/// * `cfg` - The `[connectivity]` configuration section.
/// * `offline` - `--offline` was given; no probing happens.
/// * `monitor` - The monitor to publish to, normally `ConnectivityMonitor::global()`.
///
/// ## Returns
///
/// * `Result<Option<JoinHandle<()>>>` - The background prober, or `None`
///   when probing is disabled. Abort the handle to stop probing.
///
/// ## Errors
///
/// Returns an error if `cfg.probe_addr` is not a valid `host:port` socket
/// address.
pub async fn start_prober(
    cfg: &ConnectivityConfig,
    offline: bool,
    monitor: &Arc<ConnectivityMonitor>,
) -> Result<Option<JoinHandle<()>>> {
    if offline || !cfg.enabled {
        info!("Connectivity probing disabled.");
        monitor.set(Connectivity::Offline);
        return Ok(None);
    }
    let addr: SocketAddr = cfg
        .probe_addr
        .parse()
        .with_context(|| format!("Invalid connectivity probe address '{}'", cfg.probe_addr))?;

    // Publish the first result before anything renders the indicator.
    monitor.set(probe(addr, cfg.probe_timeout()).await);
    debug!("Initial connectivity: {}", monitor.current());

    Ok(Some(spawn_prober(
        Arc::clone(monitor),
        addr,
        cfg.probe_timeout(),
        cfg.poll_interval(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[test]
    fn subscription_guard_tracks_lifecycle() {
        let monitor = ConnectivityMonitor::new(Connectivity::Offline);
        assert_eq!(monitor.subscriber_count(), 0);
        let first = monitor.subscribe();
        let second = monitor.subscribe();
        assert_eq!(monitor.subscriber_count(), 2);
        drop(first);
        assert_eq!(monitor.subscriber_count(), 1);
        drop(second);
        assert_eq!(monitor.subscriber_count(), 0);
    }

    #[test]
    fn set_only_notifies_on_change() {
        let monitor = ConnectivityMonitor::new(Connectivity::Offline);
        let mut sub = monitor.subscribe();
        monitor.set(Connectivity::Offline);
        assert_eq!(sub.poll_change(), None);
        monitor.set(Connectivity::Online);
        assert_eq!(sub.poll_change(), Some(Connectivity::Online));
        assert_eq!(sub.poll_change(), None);
        assert_eq!(monitor.current(), Connectivity::Online);
        assert_eq!(sub.current(), Connectivity::Online);
    }

    #[test]
    fn set_without_subscribers_still_updates_state() {
        let monitor = ConnectivityMonitor::new(Connectivity::Offline);
        monitor.set(Connectivity::Online);
        assert_eq!(monitor.current(), Connectivity::Online);
    }

    #[tokio::test]
    async fn changed_wakes_subscriber() {
        let monitor = Arc::new(ConnectivityMonitor::new(Connectivity::Offline));
        let mut sub = monitor.subscribe();
        let publisher = Arc::clone(&monitor);
        tokio::spawn(async move { publisher.set(Connectivity::Online) });
        assert_eq!(sub.changed().await, Some(Connectivity::Online));
    }

    #[test]
    fn global_monitor_is_shared() {
        let a = ConnectivityMonitor::global();
        let b = ConnectivityMonitor::global();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn probe_reports_online_for_listening_socket() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert_eq!(
            probe(addr, Duration::from_secs(1)).await,
            Connectivity::Online
        );
    }

    #[tokio::test]
    async fn probe_reports_offline_for_closed_port() {
        // Bind then drop to get a port with nothing listening on it.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        assert_eq!(
            probe(addr, Duration::from_millis(500)).await,
            Connectivity::Offline
        );
    }

    #[tokio::test]
    async fn disabled_prober_pins_offline() {
        let monitor = Arc::new(ConnectivityMonitor::new(Connectivity::Online));
        let handle = start_prober(&ConnectivityConfig::default(), true, &monitor)
            .await
            .unwrap();
        assert!(handle.is_none());
        assert_eq!(monitor.current(), Connectivity::Offline);
    }

    #[tokio::test]
    async fn started_prober_reports_online_before_returning() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let cfg = ConnectivityConfig {
            probe_addr: listener.local_addr().unwrap().to_string(),
            ..ConnectivityConfig::default()
        };
        let monitor = Arc::new(ConnectivityMonitor::new(Connectivity::Offline));

        let handle = start_prober(&cfg, false, &monitor).await.unwrap();

        // No waiting: the first result is already published.
        assert_eq!(monitor.current(), Connectivity::Online);
        assert_eq!(monitor.subscribe().current(), Connectivity::Online);
        handle.expect("prober should be running").abort();
    }

    #[tokio::test]
    async fn invalid_probe_address_is_an_error() {
        let cfg = ConnectivityConfig {
            probe_addr: "not-an-address".to_string(),
            ..ConnectivityConfig::default()
        };
        let monitor = Arc::new(ConnectivityMonitor::new(Connectivity::Offline));
        assert!(start_prober(&cfg, false, &monitor).await.is_err());
    }

    #[tokio::test]
    async fn prober_publishes_first_result() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let monitor = Arc::new(ConnectivityMonitor::new(Connectivity::Offline));
        let mut sub = monitor.subscribe();
        let handle = spawn_prober(
            Arc::clone(&monitor),
            addr,
            Duration::from_secs(1),
            Duration::from_secs(60),
        );
        assert_eq!(sub.changed().await, Some(Connectivity::Online));
        handle.abort();
    }
}
