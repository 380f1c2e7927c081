//! # Hestia FAQ Command
//!
//! File: cli/src/commands/faq.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Prints the knowledge base as an accordion: every question numbered from
//! 1, collapsed by default. Opened items show their answer indented under
//! the question.
//!
//! ## Examples
//!
//! ```bash
//! hestia faq                 # all collapsed
//! hestia faq --open 3        # expand item 3
//! hestia faq --open 3 --open 3   # toggled twice, collapsed again
//! hestia faq --all
//! ```
//!
use crate::core::error::{HestiaError, Result};
use crate::knowledge::KnowledgeBase;
use clap::Parser;
use std::collections::BTreeSet;
use std::fmt::Write;
use tracing::debug;

const ANSWER_INDENT: &str = "     ";

#[derive(Parser, Debug)]
pub struct FaqArgs {
    /// Toggle item N open (1-based). May be repeated.
    #[arg(long = "open", value_name = "N")]
    pub open: Vec<usize>,

    /// Expand every item.
    #[arg(long, conflicts_with = "open")]
    pub all: bool,
}

/// Which FAQ items are expanded. Ids are 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    count: usize,
    open: BTreeSet<usize>,
}

impl Accordion {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            open: BTreeSet::new(),
        }
    }

    /// Flips item `id`. Returns whether it is open afterwards.
    pub fn toggle(&mut self, id: usize) -> std::result::Result<bool, HestiaError> {
        if id == 0 || id > self.count {
            return Err(HestiaError::UnknownFaqItem {
                id,
                count: self.count,
            });
        }
        if self.open.remove(&id) {
            Ok(false)
        } else {
            self.open.insert(id);
            Ok(true)
        }
    }

    pub fn open_all(&mut self) {
        self.open = (1..=self.count).collect();
    }

    pub fn is_open(&self, id: usize) -> bool {
        self.open.contains(&id)
    }

    pub fn render(&self, knowledge: &KnowledgeBase) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "❓ Frequently Asked Questions");
        let _ = writeln!(
            out,
            "Everything you need to know about our Tourism & Hospitality programs\n"
        );
        for (index, entry) in knowledge.iter().enumerate() {
            let id = index + 1;
            let open = self.is_open(id);
            let marker = if open { "▾" } else { "▸" };
            let _ = writeln!(out, "{} {:>2}. {}", marker, id, entry.question);
            if open {
                for line in entry.answer.lines() {
                    if line.is_empty() {
                        out.push('\n');
                    } else {
                        let _ = writeln!(out, "{}{}", ANSWER_INDENT, line);
                    }
                }
                out.push('\n');
            }
        }
        out
    }
}

pub async fn handle_faq(args: FaqArgs) -> Result<()> {
    let knowledge = KnowledgeBase::department();
    let mut accordion = Accordion::new(knowledge.len());
    if args.all {
        accordion.open_all();
    }
    for id in args.open {
        let now_open = accordion.toggle(id)?;
        debug!("FAQ item {} is now {}", id, if now_open { "open" } else { "closed" });
    }
    print!("{}", accordion.render(&knowledge));
    Ok(())
}
