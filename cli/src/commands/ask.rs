//! # Hestia Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! One-shot question answering: `hestia ask <question...>` runs the matcher
//! once and prints the answer, with no delay and no splash. Useful for
//! scripting and for checking how a phrasing is matched.
//!
//! ## Examples
//!
//! ```bash
//! hestia ask What jobs can I get?
//! hestia -vv ask "who made this"   # shows which rule fired
//! ```
//!
use crate::core::error::{HestiaError, Result};
use crate::knowledge::{KnowledgeBase, Matcher};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question. Several words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

pub async fn handle_ask(args: AskArgs) -> Result<()> {
    let question = args.question.join(" ");
    if question.trim().is_empty() {
        anyhow::bail!(HestiaError::EmptyInput);
    }

    let matcher = Matcher::new(Arc::new(KnowledgeBase::department()));
    info!("Answering one-shot question: {:?}", question);
    println!("{}", matcher.answer(&question));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_whitespace_question_is_rejected() {
        let args = AskArgs {
            question: vec!["  ".to_string(), "\t".to_string()],
        };
        let err = handle_ask(args).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<HestiaError>(),
            Some(&HestiaError::EmptyInput)
        );
    }

    #[tokio::test]
    async fn test_question_is_answered() {
        let args = AskArgs {
            question: vec!["thesis".to_string()],
        };
        assert!(handle_ask(args).await.is_ok());
    }
}
