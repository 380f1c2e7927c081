//! # Chat REPL Input
//!
//! File: cli/src/commands/chat/input.rs
//! Author: Group AUZA
//!
//! Splits a line typed at the chat prompt into either a slash command or a
//! message for the assistant.
//!

/// What one line at the chat prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// Free text for the matcher. May be blank; the conversation rejects it.
    Message(String),
    /// `/N`: press the N-th quick-response button.
    Quick(usize),
    /// `/quick`: list the quick-response buttons.
    QuickList,
    /// `/history`: reprint the transcript with timestamps.
    History,
    Status,
    Install,
    Help,
    Exit,
    Unknown(String),
}

const EXIT_WORDS: [&str; 3] = ["bye", "exit", "quit"];

pub fn parse_input(line: &str) -> ReplInput {
    let trimmed = line.trim();
    if EXIT_WORDS.contains(&trimmed.to_lowercase().as_str()) {
        return ReplInput::Exit;
    }
    let Some(command) = trimmed.strip_prefix('/') else {
        return ReplInput::Message(line.to_string());
    };
    if let Ok(number) = command.parse::<usize>() {
        return ReplInput::Quick(number);
    }
    match command.to_lowercase().as_str() {
        "quick" | "q" => ReplInput::QuickList,
        "history" => ReplInput::History,
        "status" => ReplInput::Status,
        "install" => ReplInput::Install,
        "help" | "?" => ReplInput::Help,
        "exit" | "quit" => ReplInput::Exit,
        _ => ReplInput::Unknown(trimmed.to_string()),
    }
}

pub const HELP_TEXT: &str = "Type a question and press Enter. Commands:
  /quick      list the quick questions
  /N          ask quick question N
  /history    show the conversation so far
  /status     show the online/offline indicator
  /install    install Hestia's configuration
  /help       show this help
  bye         leave the chat";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_message() {
        assert_eq!(
            parse_input("What jobs can I get?"),
            ReplInput::Message("What jobs can I get?".to_string())
        );
        assert_eq!(parse_input("   "), ReplInput::Message("   ".to_string()));
    }

    #[test]
    fn test_slash_commands() {
        assert_eq!(parse_input("/7"), ReplInput::Quick(7));
        assert_eq!(parse_input(" /quick "), ReplInput::QuickList);
        assert_eq!(parse_input("/HISTORY"), ReplInput::History);
        assert_eq!(parse_input("/install"), ReplInput::Install);
        assert_eq!(parse_input("/status"), ReplInput::Status);
        assert_eq!(parse_input("/?"), ReplInput::Help);
        assert_eq!(parse_input("/nope"), ReplInput::Unknown("/nope".to_string()));
    }

    #[test]
    fn test_exit_words() {
        assert_eq!(parse_input("bye"), ReplInput::Exit);
        assert_eq!(parse_input("QUIT"), ReplInput::Exit);
        assert_eq!(parse_input("/exit"), ReplInput::Exit);
        assert_eq!(
            parse_input("bye for now"),
            ReplInput::Message("bye for now".to_string())
        );
    }
}
