//! # Hestia Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! The interactive conversation view. Shows the loading splash, then a
//! header with the assistant's name and the online/offline indicator, then
//! the welcome message, and reads questions line by line from stdin.
//!
//! ## Architecture
//!
//! - `handle_chat` loads configuration, starts the connectivity prober
//!   (unless `--offline`), builds the `Conversation` and hands stdin to the
//!   REPL.
//! - `ChatSession::run` owns the conversation for the whole session. It
//!   subscribes to the connectivity monitor when it starts and drops the
//!   subscription when it returns, printing a notice whenever the state
//!   flips while waiting for input.
//! - Every submission is followed by the typing indicator and the
//!   assistant's answer once the thinking delay has passed.
//! - `input` parses slash commands (`/quick`, `/N`, `/install`, ...).
//!
//! ## Examples
//!
//! ```bash
//! hestia chat
//! hestia chat --no-splash --delay-ms 0 --offline < questions.txt
//! ```
//!
use crate::common::install::{is_yes, ConfigInstallPrompt, InstallAffordance, InstallOutcome};
use crate::common::network::connectivity::{start_prober, ConnectivityMonitor};
use crate::common::ui::indicator::{connectivity_notice, header_line, typing_line};
use crate::common::ui::loading::show_splash;
use crate::conversation::{Conversation, Turn};
use crate::core::config;
use crate::core::error::Result;
use crate::knowledge::{KnowledgeBase, Matcher, QUICK_RESPONSES};
use anyhow::Context;
use chrono::Local;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::{debug, info};

pub mod input;

use input::{parse_input, ReplInput, HELP_TEXT};

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Skip the loading splash.
    #[arg(long)]
    pub no_splash: bool,

    /// Thinking delay before each answer, overriding the configuration.
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Do not probe connectivity; the indicator stays Offline.
    #[arg(long)]
    pub offline: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs the interactive chat on stdin until the user leaves or input ends.
///
/// ## Arguments
///
/// * `args` - Parsed `chat` flags.
/// * `config_dir` - `--config-dir` override for the user configuration.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` when the session ends normally.
///
/// ## Errors
///
/// Fails if the configuration cannot be loaded, the connectivity probe
/// address is invalid, or stdin cannot be read.
pub async fn handle_chat(args: ChatArgs, config_dir: Option<&Path>) -> Result<()> {
    let cfg = config::load_config(config_dir)?;
    debug!("Chat args: {:?}", args);

    if cfg.loading.enabled && !args.no_splash {
        show_splash(&cfg.assistant.name, cfg.loading.duration()).await;
    }

    // The first probe result is published before the header is printed.
    let monitor = ConnectivityMonitor::global();
    let prober = start_prober(&cfg.connectivity, args.offline, &monitor).await?;

    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| cfg.assistant.response_delay());
    let install_target = config::user_config_path(config_dir);
    // The REPL asks the [y/N] question itself since it owns stdin.
    let install = match &install_target {
        Some(target) => InstallAffordance::for_config(target.clone(), true),
        None => InstallAffordance::new(),
    };

    let matcher = Matcher::new(Arc::new(KnowledgeBase::department()));
    let mut session = ChatSession {
        name: cfg.assistant.name.clone(),
        conversation: Conversation::new(matcher, &cfg.assistant.greeting, delay),
        monitor,
        install,
        install_target,
    };

    info!("Starting chat session (delay {:?})", delay);
    let result = session
        .run(BufReader::new(tokio::io::stdin()).lines())
        .await;

    if let Some(handle) = prober {
        handle.abort();
    }
    result
}

struct ChatSession {
    name: String,
    conversation: Conversation,
    monitor: Arc<ConnectivityMonitor>,
    install: InstallAffordance<ConfigInstallPrompt>,
    install_target: Option<PathBuf>,
}

impl ChatSession {
    async fn run<R>(&mut self, mut lines: Lines<R>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut subscription = self.monitor.subscribe();
        println!("{}", header_line(&self.name, subscription.current()));
        println!();
        if let Some(greeting) = self.conversation.transcript().first() {
            println!("{}: {}\n", self.name, greeting.text);
        }
        println!("Type /help for commands or /quick for suggested questions.");
        if self.install.is_installable() {
            println!("Tip: /install saves Hestia's settings for next time.");
        }

        let mut watching = true;
        loop {
            prompt();
            let line = tokio::select! {
                line = lines.next_line() => line.context("Failed to read from stdin")?,
                state = subscription.changed(), if watching => {
                    match state {
                        Some(state) => println!("\n{}", connectivity_notice(state)),
                        None => watching = false,
                    }
                    continue;
                }
            };
            let Some(line) = line else {
                println!();
                break;
            };

            match parse_input(&line) {
                ReplInput::Exit => {
                    println!("{}: Goodbye! 👋", self.name);
                    break;
                }
                ReplInput::Message(text) => {
                    if self.conversation.submit(&text).is_err() {
                        continue;
                    }
                    self.reply().await;
                }
                ReplInput::Quick(number) => {
                    match self.conversation.submit_quick(number) {
                        Ok(turn) => println!("You: {}", turn.text),
                        Err(e) => {
                            println!("{}", e);
                            continue;
                        }
                    }
                    self.reply().await;
                }
                ReplInput::QuickList => print_quick_responses(),
                ReplInput::History => self.print_history(),
                ReplInput::Status => {
                    println!("{}", header_line(&self.name, self.monitor.current()))
                }
                ReplInput::Install => self.offer_install(&mut lines).await?,
                ReplInput::Help => println!("{}", HELP_TEXT),
                ReplInput::Unknown(command) => {
                    println!("Unknown command {}. Type /help for the list.", command)
                }
            }
        }
        Ok(())
    }

    /// Shows the typing indicator and answers everything still pending.
    async fn reply(&mut self) {
        while self.conversation.is_typing() {
            debug!("{} question(s) waiting for an answer", self.conversation.pending());
            println!("{}", typing_line(&self.name));
            if let Some(turn) = self.conversation.await_response().await {
                println!("{}: {}\n", self.name, turn.text);
            }
        }
    }

    async fn offer_install<R>(&mut self, lines: &mut Lines<R>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        if self.install.is_installed() {
            println!("Hestia is already installed.");
            return Ok(());
        }
        let Some(target) = self.install_target.as_ref().filter(|_| self.install.is_installable())
        else {
            println!("Install is not available right now.");
            return Ok(());
        };

        print!("Install Hestia's configuration to {}? [y/N] ", target.display());
        let _ = std::io::stdout().flush();
        let answer = lines
            .next_line()
            .await
            .context("Failed to read install confirmation")?
            .unwrap_or_default();
        if !is_yes(&answer) {
            println!("Install dismissed.");
            return Ok(());
        }

        match self.install.trigger().await {
            Some(InstallOutcome::Accepted) => println!("✅ Hestia installed."),
            Some(InstallOutcome::Dismissed) => println!("Install dismissed."),
            None => println!("Install failed. Run with -v for details."),
        }
        Ok(())
    }

    fn print_history(&self) {
        for turn in self.conversation.transcript() {
            println!("{}", self.format_turn(turn));
        }
    }

    fn format_turn(&self, turn: &Turn) -> String {
        let speaker = if turn.from_assistant {
            self.name.as_str()
        } else {
            "You"
        };
        format!(
            "[{}] {}: {}",
            turn.timestamp.with_timezone(&Local).format("%H:%M"),
            speaker,
            turn.text
        )
    }
}

fn prompt() {
    print!("You: ");
    let _ = std::io::stdout().flush();
}

fn print_quick_responses() {
    println!("Quick questions:");
    for (index, prompt) in QUICK_RESPONSES.iter().enumerate() {
        println!("  /{}  {}", index + 1, prompt);
    }
}
