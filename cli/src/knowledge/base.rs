//! # Hestia Knowledge Base
//!
//! File: cli/src/knowledge/base.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! The single table of department questions and answers. The chat matcher,
//! the FAQ listing and the HTTP API all read from the same `KnowledgeBase`,
//! usually shared as an `Arc<KnowledgeBase>`.
//!
//! Entry order matters: the matcher's keyword topics refer to entries by
//! position (see `Topic::entry_index`).
//!
use serde::Serialize;

/// One question/answer record. Identity is its position in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Ordered, immutable list of `FaqEntry` records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<FaqEntry>,
}

/// Canned prompts offered as quick-response buttons.
pub const QUICK_RESPONSES: [&str; 9] = [
    "Tell me about the programs",
    "What are the industry partnerships?",
    "What events and competitions are there?",
    "What practical training is included?",
    "What are the extra costs?",
    "What's the academic content like?",
    "What jobs can I get?",
    "Do I need to do a thesis?",
    // Reworded from "Who developed this?", which matched no rule.
    "Who is your developer?",
];

const DEPARTMENT_FAQ: [FaqEntry; 10] = [
    FaqEntry {
        question: "What programs are offered in the Tourism & Hospitality Department?",
        answer: "BSTM & BSHM\n\nBSTM – Bachelor of Science in Tourism Management\nFocuses on airlines, travel agencies, tour guiding, events, and destinations.\n\nBSHM – Bachelor of Science in Hospitality Management\nFocuses on hotels, restaurants, cooking, events, and customer service.",
    },
    FaqEntry {
        question: "Does the department have real-world industry partnerships?",
        answer: "Yes! We have partnerships with Bayfront Hotel, Waterfront Hotel, and Jeju Air for practical training and internship opportunities.",
    },
    FaqEntry {
        question: "What specific courses are included in the BSTM curriculum?",
        answer: "The BSTM curriculum includes courses in tourism management, airline operations, travel agency management, tour guiding, event planning, destination management, and tourism marketing. (Note: Detailed curriculum can be provided upon request)",
    },
    FaqEntry {
        question: "Are there notable student events or competitions?",
        answer: "Yes! The department organizes a multi-day event featuring competitions like bartending, market basket, tray relay, housekeeping, airline voice over, tour guiding/vlogging, and hair & makeup.",
    },
    FaqEntry {
        question: "What practical training is included?",
        answer: "Labs and simulations in both programs, plus internships via industry partners to give you real-world experience.",
    },
    FaqEntry {
        question: "What extra costs should I expect as a Tourism or Hospitality Management student?",
        answer: "Additional expenses for Lab Uniform, culinary ingredients, Event participation fees (MICE), and OJT requirements.",
    },
    FaqEntry {
        question: "What's the academic content like?",
        answer: "Heavy on memorization (maps, cultures), system use like Amadeus, Property Management System (PMS), and event planning (MICE).",
    },
    FaqEntry {
        question: "What jobs can I get after graduation?",
        answer: "BSTM graduates can become:\n• Travel or tour agents\n• Flight attendants\n• Tourism officers\n• Event organizers\n\nBSHM graduates can become:\n• Hotel or resort managers\n• Chefs or kitchen supervisors\n• Front desk managers\n• F&B supervisors",
    },
    FaqEntry {
        question: "Do we need to take a thesis or research subject?",
        answer: "Yes, usually in your 3rd or 4th year you'll complete a thesis or research project.",
    },
    FaqEntry {
        question: "Who is your developer?",
        answer: "This chatbot was developed by Group AUZA:\n\n• Francisco Dag-uman\n• Martin John Bacho\n• Ryan Galano\n• Ramsil Calapre",
    },
];

impl KnowledgeBase {
    /// The Tourism & Hospitality Department question bank.
    pub fn department() -> Self {
        Self::from_entries(DEPARTMENT_FAQ.to_vec())
    }

    pub fn from_entries(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)] // Pairs with `len`; only the tests call it.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FaqEntry> {
        self.entries.iter()
    }
}
