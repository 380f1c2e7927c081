//! # Hestia Knowledge Module
//!
//! File: cli/src/knowledge/mod.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Static department data and the rule-based matcher that answers from it.
//!
//! - `base`: the shared question/answer table and the quick-response prompts
//! - `matcher`: the ordered decision list that maps free text to an answer
//!
pub mod base;
pub mod matcher;

pub use base::{KnowledgeBase, QUICK_RESPONSES};
pub use matcher::Matcher;
