//! # Hestia UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Terminal presentation helpers shared by the commands:
//!
//! - **`loading`**: the timed splash shown before the chat starts.
//! - **`indicator`**: the header line (assistant name plus online/offline
//!   state) and the "thinking" line shown while an answer is pending.
//!
pub mod indicator;
pub mod loading;
