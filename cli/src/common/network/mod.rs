//! # Hestia Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Network observation helpers. Hestia answers entirely from local data, so
//! nothing here is ever required for the assistant to work; it only feeds
//! the online/offline indicator.
//!
//! - **`connectivity`**: the process-wide `ConnectivityMonitor`, its
//!   `Subscription` guards, and the background TCP prober.
//!
pub mod connectivity;
