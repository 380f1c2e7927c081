//! # Conversation Session
//!
//! File: cli/src/conversation/session.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Owns the transcript of one chat session and drives the matcher after each
//! user submission, with an artificial "thinking" delay.
//!
//! ## States
//!
//! - **Idle**: nothing pending.
//! - **AwaitingResponse**: at least one user turn has not been answered yet;
//!   the typing indicator is shown.
//!
//! `submit` appends the user turn immediately and queues the question.
//! `await_response` sleeps for the configured delay and then answers the
//! oldest queued question. Questions submitted while another is pending wait
//! in FIFO order, each getting its own full delay, so at most one timer is
//! ever outstanding.
//!
//! ## Examples
//!
//! ```rust
//! let mut chat = Conversation::new(matcher, "Hello!", Duration::from_secs(1));
//! chat.submit("What jobs can I get?")?;
//! if let Some(reply) = chat.await_response().await {
//!     println!("{}", reply.text);
//! }
//! ```
//!
use super::turn::Turn;
use crate::core::error::HestiaError;
use crate::knowledge::{Matcher, QUICK_RESPONSES};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, info};

/// Whether the assistant still owes an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    Idle,
    AwaitingResponse,
}

/// # Conversation (`Conversation`)
///
/// One chat session: the append-only transcript plus the FIFO queue of
/// questions that have been shown but not answered yet. Turns are never
/// edited or removed, and ids are sequential from `"1"` (the greeting).
pub struct Conversation {
    matcher: Matcher,
    delay: Duration,
    transcript: Vec<Turn>,
    pending: VecDeque<String>,
    next_id: u64,
}

impl Conversation {
    /// # New Conversation (`new`)
    ///
    /// Starts a session whose first turn is the assistant's `greeting`.
    ///
    /// ## Arguments
    ///
    /// * `matcher` - Answers each queued question.
    /// * `greeting` - Text of the welcome turn.
    /// * `delay` - Thinking delay applied by `await_response`.
    ///
    /// ## Returns
    ///
    /// * `Conversation` - Idle, with a one-turn transcript.
    pub fn new(matcher: Matcher, greeting: &str, delay: Duration) -> Self {
        let mut conversation = Self {
            matcher,
            delay,
            transcript: Vec::new(),
            pending: VecDeque::new(),
            next_id: 1,
        };
        let id = conversation.next_turn_id();
        conversation.transcript.push(Turn::assistant(id, greeting));
        conversation
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn state(&self) -> ExchangeState {
        if self.pending.is_empty() {
            ExchangeState::Idle
        } else {
            ExchangeState::AwaitingResponse
        }
    }

    /// Whether the typing indicator should be visible.
    pub fn is_typing(&self) -> bool {
        self.state() == ExchangeState::AwaitingResponse
    }

    /// Number of user turns still waiting for an answer.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// # Submit (`submit`)
    ///
    /// Records a user submission and queues it for an answer.
    ///
    /// ## Arguments
    ///
    /// * `text` - The user's message, stored verbatim.
    ///
    /// ## Returns
    ///
    /// * `Result<&Turn, HestiaError>` - The user turn just appended.
    ///
    /// ## Errors
    ///
    /// `HestiaError::EmptyInput` for empty or whitespace-only text. The
    /// transcript is then untouched and nothing is queued.
    pub fn submit(&mut self, text: &str) -> Result<&Turn, HestiaError> {
        if text.trim().is_empty() {
            debug!("Rejected empty submission");
            return Err(HestiaError::EmptyInput);
        }
        info!("Sending message: {:?}", text);
        // The user turn shows up at once; the answer waits in the queue.
        let id = self.next_turn_id();
        self.transcript.push(Turn::user(id, text));
        self.pending.push_back(text.to_string());
        Ok(self.last_turn())
    }

    /// Submits the `number`-th quick-response prompt (1-based).
    pub fn submit_quick(&mut self, number: usize) -> Result<&Turn, HestiaError> {
        let prompt = number
            .checked_sub(1)
            .and_then(|index| QUICK_RESPONSES.get(index).copied())
            .ok_or(HestiaError::UnknownQuickResponse {
                index: number,
                count: QUICK_RESPONSES.len(),
            })?;
        self.submit(prompt)
    }

    /// Waits out the thinking delay, then answers the oldest pending
    /// question. Returns `None` right away when nothing is pending.
    ///
    /// Dropping the returned future before it completes leaves the queue
    /// unchanged.
    pub async fn await_response(&mut self) -> Option<&Turn> {
        if self.pending.is_empty() {
            return None;
        }
        // Nothing is popped until the delay has elapsed.
        tokio::time::sleep(self.delay).await;
        self.respond_now()
    }

    /// Answers the oldest pending question without waiting.
    pub fn respond_now(&mut self) -> Option<&Turn> {
        let question = self.pending.pop_front()?;
        let answer = self.matcher.answer(&question);
        debug!("Bot response: {:?}", answer);
        let id = self.next_turn_id();
        self.transcript.push(Turn::assistant(id, answer));
        Some(self.last_turn())
    }

    fn next_turn_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }

    fn last_turn(&self) -> &Turn {
        // Only called right after a push.
        &self.transcript[self.transcript.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::matcher::FALLBACK_MESSAGE;
    use crate::knowledge::KnowledgeBase;
    use std::sync::Arc;

    fn conversation(delay: Duration) -> Conversation {
        let matcher = Matcher::new(Arc::new(KnowledgeBase::department()));
        Conversation::new(matcher, "Hello! I'm Hestia.", delay)
    }

    #[test]
    fn starts_with_greeting_and_idle() {
        let chat = conversation(Duration::ZERO);
        assert_eq!(chat.transcript().len(), 1);
        assert!(chat.transcript()[0].from_assistant);
        assert_eq!(chat.transcript()[0].text, "Hello! I'm Hestia.");
        assert_eq!(chat.state(), ExchangeState::Idle);
        assert!(!chat.is_typing());
    }

    #[test]
    fn empty_submission_is_rejected_without_side_effects() {
        let mut chat = conversation(Duration::ZERO);
        assert_eq!(chat.submit("").unwrap_err(), HestiaError::EmptyInput);
        assert_eq!(chat.submit("   \t\n").unwrap_err(), HestiaError::EmptyInput);
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.pending(), 0);
        assert_eq!(chat.state(), ExchangeState::Idle);
    }

    #[tokio::test]
    async fn empty_submission_never_produces_a_response() {
        let mut chat = conversation(Duration::ZERO);
        let _ = chat.submit("  ");
        assert!(chat.await_response().await.is_none());
        assert_eq!(chat.transcript().len(), 1);
    }

    #[tokio::test]
    async fn submission_then_response() {
        let mut chat = conversation(Duration::ZERO);
        let turn = chat.submit("What jobs can I get?").unwrap();
        assert!(!turn.from_assistant);
        assert_eq!(turn.id, "2");
        assert!(chat.is_typing());

        let reply = chat.await_response().await.unwrap();
        assert!(reply.from_assistant);
        assert!(reply.text.contains("Travel or tour agents"));
        assert_eq!(reply.id, "3");
        assert_eq!(chat.state(), ExchangeState::Idle);
        assert_eq!(chat.transcript().len(), 3);
    }

    #[tokio::test]
    async fn queued_submissions_are_answered_in_order() {
        let mut chat = conversation(Duration::ZERO);
        chat.submit("asdkjfasdf").unwrap();
        chat.submit("who made this").unwrap();
        assert_eq!(chat.pending(), 2);

        let first = chat.await_response().await.unwrap().text.clone();
        assert_eq!(first, FALLBACK_MESSAGE);
        assert!(chat.is_typing());

        let second = chat.await_response().await.unwrap().text.clone();
        assert!(second.contains("Group AUZA"));
        assert!(!chat.is_typing());

        let speakers: Vec<bool> = chat.transcript().iter().map(|t| t.from_assistant).collect();
        assert_eq!(speakers, vec![true, false, false, true, true]);
    }

    #[test]
    fn turn_ids_are_unique() {
        let mut chat = conversation(Duration::ZERO);
        chat.submit("programs").unwrap();
        chat.respond_now();
        chat.submit("thesis").unwrap();
        chat.respond_now();
        let mut ids: Vec<&str> = chat.transcript().iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn quick_response_submits_canned_prompt() {
        let mut chat = conversation(Duration::ZERO);
        let turn = chat.submit_quick(7).unwrap();
        assert_eq!(turn.text, "What jobs can I get?");
        let reply = chat.respond_now().unwrap();
        assert!(reply.text.contains("Flight attendants"));
    }

    #[test]
    fn unknown_quick_response_is_an_error() {
        let mut chat = conversation(Duration::ZERO);
        assert_eq!(
            chat.submit_quick(0).unwrap_err(),
            HestiaError::UnknownQuickResponse { index: 0, count: 9 }
        );
        assert!(chat.submit_quick(10).is_err());
        assert_eq!(chat.transcript().len(), 1);
    }

    #[tokio::test]
    async fn response_waits_for_the_delay() {
        let delay = Duration::from_millis(50);
        let mut chat = conversation(delay);
        chat.submit("thesis").unwrap();
        let started = std::time::Instant::now();
        chat.await_response().await.unwrap();
        assert!(started.elapsed() >= delay);
    }
}
