//! # Status Indicators
//!
//! File: cli/src/common/ui/indicator.rs
//! Author: Group AUZA
//!
//! Single-line renderings of the chat header and the typing indicator.
//!
use crate::common::network::connectivity::Connectivity;

pub fn header_line(name: &str, connectivity: Connectivity) -> String {
    let icon = match connectivity {
        Connectivity::Online => "🟢",
        Connectivity::Offline => "🟠",
    };
    format!("{} • Tourism & Hospitality Assistant   {} {}", name, icon, connectivity)
}

/// Shown when the online/offline state flips mid-conversation.
pub fn connectivity_notice(connectivity: Connectivity) -> String {
    match connectivity {
        Connectivity::Online => "[Online]".to_string(),
        Connectivity::Offline => "[Offline] Answers still work from local data.".to_string(),
    }
}

pub fn typing_line(name: &str) -> String {
    format!("{} is thinking...", name)
}
