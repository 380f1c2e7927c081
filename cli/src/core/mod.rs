//! # Hestia Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by every command:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the `Result` alias
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{HestiaError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
