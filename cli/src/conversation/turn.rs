//! # Conversation Turns
//!
//! File: cli/src/conversation/turn.rs
//! Author: Group AUZA
//!
//! One entry of the transcript: either something the user typed or
//! something the assistant answered. Turns are never edited once created.
//!
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub id: String,
    pub text: String,
    pub from_assistant: bool,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn user(id: String, text: impl Into<String>) -> Self {
        Self::new(id, text.into(), false)
    }

    pub fn assistant(id: String, text: impl Into<String>) -> Self {
        Self::new(id, text.into(), true)
    }

    fn new(id: String, text: String, from_assistant: bool) -> Self {
        Self {
            id,
            text,
            from_assistant,
            timestamp: Utc::now(),
        }
    }
}
