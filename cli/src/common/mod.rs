//! # Hestia Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Shared pieces used by more than one command: the install affordance, the
//! connectivity monitor and the small terminal UI helpers. Command-specific
//! logic lives under `commands::`, core infrastructure under `core::`.
//!
//! - **`install`**: the "Install" button model and its terminal prompt.
//! - **`network`**: connectivity monitoring and probing.
//! - **`ui`**: loading splash, chat header and typing indicator.
//!

/// Install affordance and the config-writing prompt.
pub mod install;
/// Connectivity monitoring.
pub mod network;
/// Terminal rendering helpers.
pub mod ui;
