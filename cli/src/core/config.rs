//! # Hestia Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Group AUZA
//!
//! ## Overview
//!
//! This module implements the configuration system for Hestia, handling loading,
//! merging, validation, and access to configuration data. Everything has a
//! sensible default, so Hestia runs without any configuration file at all.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by the individual commands)
//! 2. Project-specific `.hestia.toml` in the current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//!    (or in `--config-dir` / `HESTIA_CONFIG_DIR` when given)
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [assistant]
//! name = "Hestia"
//! response_delay_ms = 1000
//!
//! [loading]
//! enabled = true
//! duration_ms = 2500
//!
//! [connectivity]
//! enabled = true
//! probe_addr = "1.1.1.1:53"
//!
//! [server]
//! port = 8000
//! directory = "~/hestia/dist"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let delay = cfg.assistant.response_delay();
//! ```
//!
use crate::core::error::{HestiaError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub loading: LoadingConfig,
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
    #[serde(default)]
    pub server: ServerSection,
}

/// Persona and pacing of the chat assistant.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AssistantConfig {
    /// Display name used as the speaker label in the chat.
    #[serde(default = "default_assistant_name")]
    pub name: String,
    /// First assistant turn of every conversation.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Artificial "thinking" delay before each answer.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
}

/// Loading splash shown before the chat starts.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoadingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_loading_duration_ms")]
    pub duration_ms: u64,
}

/// Online/offline indicator settings.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConnectivityConfig {
    /// When false, no probing happens and the indicator reports offline.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// `host:port` the prober tries to open a TCP connection to.
    #[serde(default = "default_probe_addr")]
    pub probe_addr: String,
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

/// Defaults for `hestia serve`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_server_host")]
    pub host: IpAddr,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub enable_cors: bool,
    /// Optional static front-end bundle (can use ~). Will be expanded.
    #[serde(default)]
    pub directory: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
            greeting: default_greeting(),
            response_delay_ms: default_response_delay_ms(),
        }
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: default_loading_duration_ms(),
        }
    }
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            probe_addr: default_probe_addr(),
            probe_timeout_ms: default_probe_timeout_ms(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            enable_cors: true,
            directory: None,
        }
    }
}

impl AssistantConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

impl LoadingConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl ConnectivityConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

fn default_true() -> bool {
    true
}
fn default_assistant_name() -> String {
    "Hestia".to_string()
}
fn default_greeting() -> String {
    "Hello! I'm Hestia, your Tourism & Hospitality Department assistant. I work offline too! How can I help you today?".to_string()
}
fn default_response_delay_ms() -> u64 {
    1000
}
fn default_loading_duration_ms() -> u64 {
    2500
}
fn default_probe_addr() -> String {
    "1.1.1.1:53".to_string()
}
fn default_probe_timeout_ms() -> u64 {
    1500
}
fn default_poll_interval_secs() -> u64 {
    30
}
fn default_server_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}
fn default_server_port() -> u16 {
    8000
}

const PROJECT_CONFIG_FILENAME: &str = ".hestia.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";

/// Upper bound for the artificial delays; anything longer reads as a hang.
const MAX_DELAY_MS: u64 = 10_000;

/// Contents written by `hestia install`. Parses to `Config::default()`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# Hestia user configuration

[assistant]
name = "Hestia"
response_delay_ms = 1000

[loading]
enabled = true
duration_ms = 2500

[connectivity]
enabled = true
probe_addr = "1.1.1.1:53"
probe_timeout_ms = 1500
poll_interval_secs = 30

[server]
host = "127.0.0.1"
port = 8000
enable_cors = true
"#;

/// Location of the user configuration file.
///
/// `config_dir` (from `--config-dir` / `HESTIA_CONFIG_DIR`) wins over the
/// platform directory. Returns `None` when no config directory can be found.
pub fn user_config_path(config_dir: Option<&Path>) -> Option<PathBuf> {
    match config_dir {
        Some(dir) => Some(dir.join(USER_CONFIG_FILENAME)),
        None => ProjectDirs::from("edu", "SaintJosephCollege", "hestia")
            .map(|dirs| dirs.config_dir().join(USER_CONFIG_FILENAME)),
    }
}

pub fn load_config(config_dir: Option<&Path>) -> Result<Config> {
    let user_config = load_user_config(config_dir)?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => {
            debug!("No project configuration file (.hestia.toml) found.");
            None
        }
    };
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config(config_dir: Option<&Path>) -> Result<Option<Config>> {
    let Some(config_path) = user_config_path(config_dir) else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.hestia.toml`, stopping
/// at the first directory that holds a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Field-wise merge: a project value wins whenever it differs from the default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let defaults = Config::default();

    fn pick<T: PartialEq>(project: T, user: T, default: &T) -> T {
        if &project != default {
            project
        } else {
            user
        }
    }

    Config {
        assistant: AssistantConfig {
            name: pick(project.assistant.name, user.assistant.name, &defaults.assistant.name),
            greeting: pick(
                project.assistant.greeting,
                user.assistant.greeting,
                &defaults.assistant.greeting,
            ),
            response_delay_ms: pick(
                project.assistant.response_delay_ms,
                user.assistant.response_delay_ms,
                &defaults.assistant.response_delay_ms,
            ),
        },
        loading: LoadingConfig {
            enabled: pick(project.loading.enabled, user.loading.enabled, &defaults.loading.enabled),
            duration_ms: pick(
                project.loading.duration_ms,
                user.loading.duration_ms,
                &defaults.loading.duration_ms,
            ),
        },
        connectivity: ConnectivityConfig {
            enabled: pick(
                project.connectivity.enabled,
                user.connectivity.enabled,
                &defaults.connectivity.enabled,
            ),
            probe_addr: pick(
                project.connectivity.probe_addr,
                user.connectivity.probe_addr,
                &defaults.connectivity.probe_addr,
            ),
            probe_timeout_ms: pick(
                project.connectivity.probe_timeout_ms,
                user.connectivity.probe_timeout_ms,
                &defaults.connectivity.probe_timeout_ms,
            ),
            poll_interval_secs: pick(
                project.connectivity.poll_interval_secs,
                user.connectivity.poll_interval_secs,
                &defaults.connectivity.poll_interval_secs,
            ),
        },
        server: ServerSection {
            host: pick(project.server.host, user.server.host, &defaults.server.host),
            port: pick(project.server.port, user.server.port, &defaults.server.port),
            enable_cors: pick(
                project.server.enable_cors,
                user.server.enable_cors,
                &defaults.server.enable_cors,
            ),
            directory: project.server.directory.or(user.server.directory),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(dir) = config.server.directory.as_mut() {
        *dir = shellexpand::tilde(dir).into_owned();
        debug!("Expanded server directory: {}", dir);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.assistant.name.trim().is_empty() {
        return Err(anyhow!(HestiaError::Config(
            "assistant.name cannot be empty.".to_string()
        )));
    }
    for (key, value) in [
        ("assistant.response_delay_ms", config.assistant.response_delay_ms),
        ("loading.duration_ms", config.loading.duration_ms),
        ("connectivity.probe_timeout_ms", config.connectivity.probe_timeout_ms),
    ] {
        if value > MAX_DELAY_MS {
            return Err(anyhow!(HestiaError::Config(format!(
                "{} = {} exceeds the maximum of {} ms.",
                key, value, MAX_DELAY_MS
            ))));
        }
    }
    if config.connectivity.poll_interval_secs == 0 {
        return Err(anyhow!(HestiaError::Config(
            "connectivity.poll_interval_secs must be at least 1.".to_string()
        )));
    }
    if config.connectivity.probe_addr.parse::<SocketAddr>().is_err() {
        return Err(anyhow!(HestiaError::Config(format!(
            "Invalid probe address: '{}'. Expected IP:PORT.",
            config.connectivity.probe_addr
        ))));
    }
    if let Some(dir) = &config.server.directory {
        let dir = PathBuf::from(dir);
        if !dir.exists() {
            warn!("Configured server directory '{}' does not exist.", dir.display());
        } else if !dir.is_dir() {
            return Err(anyhow!(HestiaError::Config(format!(
                "Configured server directory '{}' exists but is not a directory.",
                dir.display()
            ))));
        }
    }
    Ok(())
}
