//! # Hestia Answer Matcher
//!
//! File: cli/src/knowledge/matcher.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Picks a canned answer for a free-text question. This is a decision list,
//! not a classifier: rules are tried in a fixed order and the first one that
//! fires wins. There is no scoring.
//!
//! ## Rules (in priority order)
//!
//! 1. **Prefix overlap**: for each knowledge base entry in order, if the
//!    lower-cased input contains the first three words of the entry's
//!    lower-cased question, that entry's answer is returned.
//! 2. **Keywords**: for each `Topic` in `Topic::ALL` order, if the input
//!    contains any of the topic's keywords, the topic's entry is returned.
//! 3. **Fallback**: `FALLBACK_MESSAGE`, listing what can be asked.
//!
//! Matching is case-insensitive and plain substring based, so `"jobs"`
//! matches the `job` keyword and `"framework"` matches `work`.
//!
//! ## Examples
//!
//! ```rust
//! let matcher = Matcher::new(Arc::new(KnowledgeBase::department()));
//! let reply = matcher.answer("What jobs can I get?");
//! assert!(reply.contains("Travel or tour agents"));
//! ```
//!
use super::base::KnowledgeBase;
use std::sync::Arc;
use tracing::debug;

/// Returned when no rule fires.
pub const FALLBACK_MESSAGE: &str = "I'd be happy to help! You can ask me about:\n\n• Programs (BSTM & BSHM)\n• Industry partnerships\n• Student events and competitions\n• Practical training\n• Costs and expenses\n• Academic content\n• Career opportunities\n• Thesis requirements\n• Developer information\n\nOr try one of the quick questions below!";

/// Number of leading question words used by the prefix-overlap rule.
const PREFIX_WORDS: usize = 3;

/// A named keyword group mapped to one knowledge base entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Programs,
    Partnerships,
    Curriculum,
    Events,
    Training,
    Costs,
    Academics,
    Careers,
    Thesis,
    Attribution,
}

impl Topic {
    /// Evaluation order of the keyword rules.
    pub const ALL: [Topic; 10] = [
        Topic::Programs,
        Topic::Partnerships,
        Topic::Curriculum,
        Topic::Events,
        Topic::Training,
        Topic::Costs,
        Topic::Academics,
        Topic::Careers,
        Topic::Thesis,
        Topic::Attribution,
    ];

    /// Lower-case trigger substrings.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::Programs => &["program", "bstm", "bshm"],
            Topic::Partnerships => &["partnership", "industry", "bayfront", "waterfront", "jeju"],
            Topic::Curriculum => &["course", "curriculum", "subject"],
            Topic::Events => &["event", "competition", "bartending", "makeup"],
            Topic::Training => &["training", "practical", "internship"],
            Topic::Costs => &["cost", "expense", "uniform", "ojt"],
            Topic::Academics => &["academic", "content", "amadeus", "pms", "mice"],
            Topic::Careers => &["job", "career", "graduate", "work"],
            Topic::Thesis => &["thesis", "research"],
            Topic::Attribution => &["developer", "who made", "created by"],
        }
    }

    /// Position of the answering entry in the department knowledge base.
    pub fn entry_index(self) -> usize {
        self as usize
    }
}

/// Which rule produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Prefix-overlap rule fired for the entry at this index.
    Prefix(usize),
    /// Keyword rule fired for this topic.
    Keyword(Topic),
    Fallback,
}

/// Pure function of (input, knowledge base), packaged with the precomputed
/// question prefixes. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Matcher {
    knowledge: Arc<KnowledgeBase>,
    prefixes: Arc<[String]>,
}

impl Matcher {
    /// # New Matcher (`new`)
    ///
    /// Wraps `knowledge` and precomputes the three-word question prefixes
    /// used by the prefix-overlap rule.
    ///
    /// ## Arguments
    ///
    /// * `knowledge` - The shared question bank.
    ///
    /// ## Returns
    ///
    /// * `Matcher` - Cheap to clone; clones share the table and prefixes.
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        let prefixes = knowledge
            .iter()
            .map(|entry| question_prefix(entry.question))
            .collect();
        Self {
            knowledge,
            prefixes,
        }
    }

    pub fn knowledge(&self) -> &Arc<KnowledgeBase> {
        &self.knowledge
    }

    /// Runs the decision list and reports which rule fired.
    pub fn classify(&self, input: &str) -> MatchOutcome {
        let normalized = input.to_lowercase();
        debug!("Finding answer for: {:?}", normalized);

        if let Some(index) = self
            .prefixes
            .iter()
            .position(|prefix| normalized.contains(prefix.as_str()))
        {
            debug!("Prefix match on entry {}", index);
            return MatchOutcome::Prefix(index);
        }

        for topic in Topic::ALL {
            if topic
                .keywords()
                .iter()
                .any(|keyword| normalized.contains(keyword))
            {
                debug!("Keyword match: {:?}", topic);
                return MatchOutcome::Keyword(topic);
            }
        }

        debug!("No rule matched, using fallback");
        MatchOutcome::Fallback
    }

    /// Selects the answer for `input`. Never fails and never returns an
    /// empty string.
    pub fn answer(&self, input: &str) -> String {
        let index = match self.classify(input) {
            MatchOutcome::Prefix(index) => Some(index),
            MatchOutcome::Keyword(topic) => Some(topic.entry_index()),
            MatchOutcome::Fallback => None,
        };
        index
            .and_then(|i| self.knowledge.get(i))
            .map(|entry| entry.answer)
            .unwrap_or(FALLBACK_MESSAGE)
            .to_string()
    }
}

/// First three space-separated words of the lower-cased question.
fn question_prefix(question: &str) -> String {
    question
        .to_lowercase()
        .split(' ')
        .take(PREFIX_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::base::{FaqEntry, QUICK_RESPONSES};

    fn matcher() -> Matcher {
        Matcher::new(Arc::new(KnowledgeBase::department()))
    }

    fn entry_answer(index: usize) -> &'static str {
        KnowledgeBase::department().get(index).unwrap().answer
    }

    #[test]
    fn test_question_prefix() {
        assert_eq!(
            question_prefix("What programs are offered in the Department?"),
            "what programs are"
        );
        assert_eq!(question_prefix("Hello there"), "hello there");
    }

    #[test]
    fn prefix_rule_fires_for_every_entry() {
        let m = matcher();
        for (index, entry) in m.knowledge().iter().enumerate() {
            let trigger = entry.question.split(' ').take(3).collect::<Vec<_>>().join(" ");
            assert_eq!(m.classify(&trigger), MatchOutcome::Prefix(index), "{trigger}");
            assert_eq!(m.answer(&trigger), entry.answer);
        }
    }

    #[test]
    fn every_keyword_selects_its_topic() {
        let m = matcher();
        for topic in Topic::ALL {
            for keyword in topic.keywords() {
                let input = format!("tell me about {keyword} please");
                assert_eq!(m.classify(&input), MatchOutcome::Keyword(topic), "{keyword}");
                assert_eq!(m.answer(&input), entry_answer(topic.entry_index()));
            }
        }
    }

    #[test]
    fn earlier_topic_wins_when_two_fire() {
        let m = matcher();
        assert_eq!(
            m.classify("is there a thesis in the program"),
            MatchOutcome::Keyword(Topic::Programs)
        );
        assert_eq!(
            m.classify("career options after the event"),
            MatchOutcome::Keyword(Topic::Events)
        );
        assert_eq!(m.answer("research and internship"), entry_answer(4));
    }

    #[test]
    fn prefix_rule_beats_keywords() {
        // "what jobs can" is entry 7's prefix; "program" would pick entry 0.
        let m = matcher();
        assert_eq!(
            m.classify("what jobs can a program graduate get"),
            MatchOutcome::Prefix(7)
        );
    }

    #[test]
    fn fallback_for_empty_and_gibberish() {
        let m = matcher();
        assert_eq!(m.answer(""), FALLBACK_MESSAGE);
        assert_eq!(m.answer("asdkjfasdf"), FALLBACK_MESSAGE);
        assert_eq!(m.classify("asdkjfasdf"), MatchOutcome::Fallback);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let m = matcher();
        assert_eq!(m.answer("PROGRAMS"), m.answer("programs"));
        assert_eq!(m.answer("WHO MADE this"), entry_answer(9));
    }

    #[test]
    fn end_to_end_careers() {
        let reply = matcher().answer("What jobs can I get?");
        assert!(reply.contains("Travel or tour agents"));
    }

    #[test]
    fn end_to_end_attribution() {
        let m = matcher();
        assert_eq!(
            m.classify("who made this"),
            MatchOutcome::Keyword(Topic::Attribution)
        );
        let reply = m.answer("who made this");
        for name in [
            "Francisco Dag-uman",
            "Martin John Bacho",
            "Ryan Galano",
            "Ramsil Calapre",
        ] {
            assert!(reply.contains(name), "missing {name}");
        }
    }

    #[test]
    fn answer_is_idempotent() {
        let m = matcher();
        let first = m.answer("What are the extra costs?");
        let second = m.answer("What are the extra costs?");
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn every_quick_response_has_an_answer() {
        let m = matcher();
        for prompt in QUICK_RESPONSES {
            assert_ne!(m.classify(prompt), MatchOutcome::Fallback, "{prompt}");
        }
    }

    #[test]
    fn developer_quick_response_gets_attribution_answer() {
        let m = matcher();
        assert_eq!(m.classify("Who developed this?"), MatchOutcome::Fallback);
        assert_eq!(m.classify(QUICK_RESPONSES[8]), MatchOutcome::Prefix(9));
        assert!(m.answer(QUICK_RESPONSES[8]).contains("Group AUZA"));
    }

    #[test]
    fn short_knowledge_base_falls_back_instead_of_panicking() {
        let kb = KnowledgeBase::from_entries(vec![FaqEntry {
            question: "Where is the campus?",
            answer: "Maasin City.",
        }]);
        let m = Matcher::new(Arc::new(kb));
        assert_eq!(m.answer("where is the campus"), "Maasin City.");
        assert_eq!(m.answer("thesis"), FALLBACK_MESSAGE);
    }
}
