// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::transport::slack::{ClientConfig, DEFAULT_API_BASE};

/// Environment variable consulted for the token when no flag is given.
pub const TOKEN_ENV: &str = "SLACK_TOKEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicConfig {
    /// Slack token (overridden by --token or SLACK_TOKEN)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Web API root (default: https://slack.com/api)
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Per-request timeout in seconds (0 = no timeout)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Channels to update when none are given on the command line
    #[serde(default)]
    pub channels: Vec<String>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
            channels: Vec::new(),
        }
    }
}

impl TopicConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base: self.api_base.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Pick the token: explicit flag, then environment, then this file.
    /// Blank values are skipped.
    pub fn resolve_token(&self, flag: Option<&str>, env: Option<String>) -> Option<String> {
        flag.map(|t| t.to_string())
            .into_iter()
            .chain(env)
            .chain(self.token.clone())
            .map(|t| t.trim().to_string())
            .find(|t| !t.is_empty())
    }
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join("slack-topic.toml")
}

/// Per-user fallback location, e.g. `~/.config/slack-topic/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("slack-topic").join("config.toml"))
}

/// The config file to use: `explicit` if given, else `slack-topic.toml` in
/// `dir` if present, else the per-user file.
pub fn locate_config(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = config_path(dir);
    if local.exists() {
        return Some(local);
    }
    user_config_path()
}

pub fn load_config(path: &Path) -> Result<Option<TopicConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: TopicConfig =
        toml::from_str(&contents).with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(Some(config))
}

pub fn save_config(path: &Path, config: &TopicConfig) -> Result<()> {
    let toml = toml::to_string_pretty(config)?;
    std::fs::write(path, toml)?;
    Ok(())
}
