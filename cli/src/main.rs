//! # Hestia Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! Entry point for the Hestia CLI, the Tourism & Hospitality Department
//! assistant of Saint Joseph College. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - `knowledge`: the question bank and the answer matcher
//! - `conversation`: transcript and pending-answer state of a chat
//! - `common`: connectivity monitor, install affordance, terminal UI helpers
//! - `core`: configuration and errors
//! - `commands`: one module per subcommand
//!
//! ## Examples
//!
//! ```bash
//! hestia chat
//! hestia ask "What jobs can I get?"
//! hestia faq --open 8
//! hestia -v serve ./dist
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod common;
mod conversation;
mod core;
mod knowledge;

#[derive(Parser, Debug)]
#[command(
    name = "hestia",
    about = "🏨 Hestia: Tourism & Hospitality Department assistant",
    long_about = "Answers questions about the BSTM and BSHM programs of Saint Joseph College.\n\
                  Works fully offline: every answer comes from the built-in FAQ.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Directory holding the user `config.toml`.
    #[arg(long, global = true, env = "HESTIA_CONFIG_DIR", value_name = "DIR")]
    config_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Ask a single question and print the answer.
    Ask(commands::ask::AskArgs),
    /// Start an interactive conversation.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Browse the frequently asked questions.
    Faq(commands::faq::FaqArgs),
    /// Install Hestia's user configuration.
    Install(commands::install::InstallArgs),
    /// Serve the JSON API and an optional front-end.
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config_dir = cli.config_dir.as_deref();
    let command_result = match cli.command {
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Chat(args) => commands::chat::handle_chat(args, config_dir).await,
        Commands::Faq(args) => commands::faq::handle_faq(args).await,
        Commands::Install(args) => commands::install::handle_install(args, config_dir).await,
        Commands::Serve(args) => commands::serve::handle_serve(args, config_dir).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use clap::CommandFactory;
    use predicates::prelude::*;

    fn hestia_cmd() -> Command {
        Command::cargo_bin("hestia").expect("Failed to find hestia binary for testing")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_main_help_flag() {
        hestia_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Tourism & Hospitality"));
    }

    #[test]
    fn test_main_version_flag() {
        hestia_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
