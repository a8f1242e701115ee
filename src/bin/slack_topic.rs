// src/bin/slack_topic.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use slack_topic::config::{self, TopicConfig};
use slack_topic::TopicUpdateRequest;

#[derive(Parser)]
#[command(
    name = "slack-topic",
    about = "Set Slack channel topics without leaving a topic-change notice behind"
)]
struct Cli {
    /// Path to a slack-topic.toml (default: ./slack-topic.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log each Slack call to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the topic and delete the resulting notification
    Set {
        /// New topic text (use "" to clear it)
        topic: String,
        /// Channel ID (repeatable; default: channels from the config file)
        #[arg(long = "channel", short = 'c')]
        channels: Vec<String>,
        /// Slack token (default: $SLACK_TOKEN, then the config file)
        #[arg(long)]
        token: Option<String>,
    },
    /// Show whether a channel ID is public or private
    Classify {
        channel: String,
    },
    /// Write a slack-topic.toml in the current directory
    Init {
        #[arg(long)]
        token: Option<String>,
        #[arg(long = "channel", short = 'c')]
        channels: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    slack_topic::logging::init(cli.verbose);

    match cli.command {
        Commands::Set {
            topic,
            channels,
            token,
        } => cmd_set(cli.config.as_deref(), topic, channels, token.as_deref()).await,
        Commands::Classify { channel } => cmd_classify(&channel),
        Commands::Init { token, channels } => cmd_init(token, channels),
    }
}

fn load_project_config(explicit: Option<&Path>) -> Result<TopicConfig> {
    let dir = slack_topic::work_dir()?;
    let Some(path) = config::locate_config(explicit, &dir) else {
        return Ok(TopicConfig::default());
    };
    if explicit.is_some() && !path.exists() {
        anyhow::bail!("Config file {} not found", path.display());
    }
    Ok(config::load_config(&path)?.unwrap_or_default())
}

/// Build the request: one --channel means single-channel mode, several
/// (or the config's list) mean multi-channel mode.
fn build_request(
    cfg: &TopicConfig,
    topic: String,
    channels: Vec<String>,
    token: Option<String>,
) -> TopicUpdateRequest {
    let mut channels = if channels.is_empty() {
        cfg.channels.clone()
    } else {
        channels
    };

    let (channel, channels) = if channels.len() == 1 {
        (channels.pop(), None)
    } else {
        (None, Some(channels))
    };

    TopicUpdateRequest {
        token,
        topic: Some(topic),
        channel,
        channels,
    }
}

async fn cmd_set(
    config_path: Option<&Path>,
    topic: String,
    channels: Vec<String>,
    token: Option<&str>,
) -> Result<()> {
    let cfg = load_project_config(config_path)?;
    let token = cfg.resolve_token(token, std::env::var(config::TOKEN_ENV).ok());
    let request = build_request(&cfg, topic, channels, token);

    let outcomes = slack_topic::update_with_config(&request, None, &cfg.client_config())
        .await
        .context("Topic update failed")?;

    for outcome in &outcomes {
        println!(
            "{} ({}): topic set, {} notification(s) removed",
            outcome.channel,
            outcome.visibility,
            outcome.deleted.len()
        );
    }
    Ok(())
}

fn cmd_classify(channel: &str) -> Result<()> {
    let visibility = slack_topic::classify(channel);
    println!("{channel}: {visibility} ({})", visibility.notification_tag());
    Ok(())
}

fn cmd_init(token: Option<String>, channels: Vec<String>) -> Result<()> {
    let dir = slack_topic::work_dir()?;
    let path = config::config_path(&dir);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    let cfg = TopicConfig {
        token,
        channels,
        ..TopicConfig::default()
    };
    config::save_config(&path, &cfg)?;
    println!("Wrote {}", path.display());
    Ok(())
}
