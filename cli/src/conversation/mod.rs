//! # Hestia Conversation Module
//!
//! File: cli/src/conversation/mod.rs
//! Author: Group AUZA
//!
//! The chat transcript and the idle/awaiting-response state machine that
//! feeds user questions to the matcher.
//!
pub mod session;
pub mod turn;

pub use session::Conversation;
pub use turn::Turn;
