//! # Hestia Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Aggregates the top-level commands of the Hestia CLI so `main.rs` can
//! dispatch to them. Each command defines its own `clap` arguments struct
//! and an async `handle_*` function.
//!
//! ## Commands
//!
//! - `ask`: answer one question and exit
//! - `chat`: the interactive conversation
//! - `faq`: the FAQ accordion
//! - `install`: write the default user configuration
//! - `serve`: the JSON API and optional front-end over HTTP
//!

/// One-shot question answering.
pub mod ask;
/// Interactive chat REPL with typing indicator, quick responses and install prompt.
pub mod chat;
/// FAQ accordion view.
pub mod faq;
/// User configuration install.
pub mod install;
/// HTTP server: JSON API plus static front-end.
pub mod serve;
