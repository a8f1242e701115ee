// src/request.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TopicError;

/// Options for a topic update, as supplied by the caller.
///
/// Every field is optional here so that "not provided" can be told apart
/// from "provided as empty"; [`TopicUpdateRequest::validate`] enforces the
/// required ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicUpdateRequest {
    /// Slack token with `channels:write`, `channels:history` and
    /// `chat:write:user` scopes (plus the `groups:*` equivalents for
    /// private channels).
    #[serde(default)]
    pub token: Option<String>,

    /// New topic. `Some("")` clears the topic.
    #[serde(default)]
    pub topic: Option<String>,

    /// Single channel id. Ignored when `channels` is non-empty.
    #[serde(default)]
    pub channel: Option<String>,

    #[serde(default)]
    pub channels: Option<Vec<String>>,
}

/// Channels a validated request operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelSelection {
    Single(String),
    Multiple(Vec<String>),
}

impl ChannelSelection {
    pub fn channels(&self) -> &[String] {
        match self {
            ChannelSelection::Single(channel) => std::slice::from_ref(channel),
            ChannelSelection::Multiple(channels) => channels,
        }
    }
}

/// A request that passed validation. Owns its values so each channel run
/// can borrow them without touching the caller's request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub token: String,
    pub topic: String,
    pub selection: ChannelSelection,
}

impl TopicUpdateRequest {
    pub fn single(token: &str, channel: &str, topic: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            topic: Some(topic.to_string()),
            channel: Some(channel.to_string()),
            channels: None,
        }
    }

    pub fn multiple(token: &str, channels: &[&str], topic: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            topic: Some(topic.to_string()),
            channel: None,
            channels: Some(channels.iter().map(|c| c.to_string()).collect()),
        }
    }

    /// Build a request from loosely-typed JSON options.
    ///
    /// A `null` value, a non-object, a non-string `channel` or a `channels`
    /// value that is not an array of strings are all rejected here.
    pub fn from_value(value: Value) -> Result<Self, TopicError> {
        match value {
            Value::Null => Err(TopicError::validation("No options were provided.")),
            Value::Object(_) => serde_json::from_value(value)
                .map_err(|e| TopicError::validation(format!("Malformed options: {e}"))),
            other => Err(TopicError::validation(format!(
                "Options must be an object, got {other}"
            ))),
        }
    }

    /// Check required fields and resolve which channel(s) to update.
    pub fn validate(&self) -> Result<ValidatedRequest, TopicError> {
        let token = match self.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => token.to_string(),
            _ => {
                return Err(TopicError::validation(
                    "The required option 'token' was not provided.",
                ))
            }
        };

        let topic = self.topic.clone().ok_or_else(|| {
            TopicError::validation("The required option 'topic' was not provided.")
        })?;

        let selection = match (&self.channels, &self.channel) {
            (Some(channels), _) if !channels.is_empty() => {
                ChannelSelection::Multiple(channels.clone())
            }
            (_, Some(channel)) if !channel.is_empty() => ChannelSelection::Single(channel.clone()),
            _ => {
                return Err(TopicError::validation(
                    "Either 'channel' (string) or 'channels' (array of strings) must be provided.",
                ))
            }
        };

        Ok(ValidatedRequest {
            token,
            topic,
            selection,
        })
    }
}
