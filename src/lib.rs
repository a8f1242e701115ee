pub mod classify;
pub mod config;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod request;
pub mod transport;
pub mod updater;

pub use classify::{classify, is_private, Visibility};
pub use error::TopicError;
pub use orchestrator::{update, update_with_config};
pub use request::{ChannelSelection, TopicUpdateRequest, ValidatedRequest};
pub use transport::slack::{ClientConfig, SlackClient};
pub use transport::{HistoryMessage, SlackTransport};
pub use updater::{topic_notifications, update_channel, ChannelOutcome};

pub fn work_dir() -> anyhow::Result<std::path::PathBuf> {
    std::env::current_dir().context("Failed to get current directory")
}

use anyhow::Context;
