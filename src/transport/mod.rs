pub mod slack;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TopicError;

/// One entry of a channel's message history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryMessage {
    /// Slack timestamp, unique within a channel.
    pub ts: String,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl HistoryMessage {
    pub fn new(ts: &str, subtype: Option<&str>) -> Self {
        Self {
            ts: ts.to_string(),
            subtype: subtype.map(|s| s.to_string()),
            text: None,
        }
    }
}

/// The Slack Web API operations a topic update needs.
///
/// `SlackClient` talks to Slack over HTTP; tests substitute an in-memory
/// implementation. Retries, rate limiting and timeouts are the
/// implementation's business.
#[async_trait]
pub trait SlackTransport: Send + Sync {
    /// `channels.setTopic`
    async fn set_topic_public(&self, channel: &str, topic: &str) -> Result<(), TopicError>;

    /// `groups.setTopic`
    async fn set_topic_private(&self, channel: &str, topic: &str) -> Result<(), TopicError>;

    /// `channels.history`, most recent window only.
    async fn fetch_history_public(&self, channel: &str) -> Result<Vec<HistoryMessage>, TopicError>;

    /// `groups.history`, most recent window only.
    async fn fetch_history_private(
        &self,
        channel: &str,
    ) -> Result<Vec<HistoryMessage>, TopicError>;

    /// `chat.delete`
    async fn delete_message(&self, channel: &str, ts: &str) -> Result<(), TopicError>;
}
