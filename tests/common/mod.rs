// tests/common/mod.rs
// In-memory SlackTransport that records every call and fails on request.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

use slack_topic::{HistoryMessage, SlackTransport, TopicError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetTopicPublic { channel: String, topic: String },
    SetTopicPrivate { channel: String, topic: String },
    HistoryPublic { channel: String },
    HistoryPrivate { channel: String },
    Delete { channel: String, ts: String },
}

#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    default_history: Vec<HistoryMessage>,
    histories: HashMap<String, Vec<HistoryMessage>>,
    fail_set_topic: HashSet<String>,
    fail_history: HashSet<String>,
    fail_delete: HashSet<String>,
    delete_gate: Option<Arc<Barrier>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// History returned for every channel without its own.
    pub fn with_history(mut self, history: Vec<HistoryMessage>) -> Self {
        self.default_history = history;
        self
    }

    pub fn with_channel_history(mut self, channel: &str, history: Vec<HistoryMessage>) -> Self {
        self.histories.insert(channel.to_string(), history);
        self
    }

    pub fn failing_set_topic(mut self, channel: &str) -> Self {
        self.fail_set_topic.insert(channel.to_string());
        self
    }

    pub fn failing_history(mut self, channel: &str) -> Self {
        self.fail_history.insert(channel.to_string());
        self
    }

    pub fn failing_delete(mut self, ts: &str) -> Self {
        self.fail_delete.insert(ts.to_string());
        self
    }

    /// Hold every delete open until `count` deletes are in flight at once.
    pub fn with_concurrent_deletes(mut self, count: usize) -> Self {
        self.delete_gate = Some(Arc::new(Barrier::new(count)));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, channel: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| match call {
                Call::SetTopicPublic { channel: c, .. }
                | Call::SetTopicPrivate { channel: c, .. }
                | Call::HistoryPublic { channel: c }
                | Call::HistoryPrivate { channel: c }
                | Call::Delete { channel: c, .. } => c == channel,
            })
            .collect()
    }

    /// `(channel, ts)` of every delete, sorted.
    pub fn deletes(&self) -> Vec<(String, String)> {
        let mut deletes: Vec<_> = self
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Delete { channel, ts } => Some((channel, ts)),
                _ => None,
            })
            .collect();
        deletes.sort();
        deletes
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn history_for(&self, channel: &str) -> Vec<HistoryMessage> {
        self.histories
            .get(channel)
            .cloned()
            .unwrap_or_else(|| self.default_history.clone())
    }

    fn remote_error(method: &str, message: &str) -> TopicError {
        TopicError::Remote {
            method: method.to_string(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl SlackTransport for RecordingTransport {
    async fn set_topic_public(&self, channel: &str, topic: &str) -> Result<(), TopicError> {
        self.record(Call::SetTopicPublic {
            channel: channel.to_string(),
            topic: topic.to_string(),
        });
        if self.fail_set_topic.contains(channel) {
            return Err(Self::remote_error("channels.setTopic", "channel_not_found"));
        }
        Ok(())
    }

    async fn set_topic_private(&self, channel: &str, topic: &str) -> Result<(), TopicError> {
        self.record(Call::SetTopicPrivate {
            channel: channel.to_string(),
            topic: topic.to_string(),
        });
        if self.fail_set_topic.contains(channel) {
            return Err(Self::remote_error("groups.setTopic", "channel_not_found"));
        }
        Ok(())
    }

    async fn fetch_history_public(
        &self,
        channel: &str,
    ) -> Result<Vec<HistoryMessage>, TopicError> {
        self.record(Call::HistoryPublic {
            channel: channel.to_string(),
        });
        if self.fail_history.contains(channel) {
            return Err(Self::remote_error("channels.history", "missing_scope"));
        }
        Ok(self.history_for(channel))
    }

    async fn fetch_history_private(
        &self,
        channel: &str,
    ) -> Result<Vec<HistoryMessage>, TopicError> {
        self.record(Call::HistoryPrivate {
            channel: channel.to_string(),
        });
        if self.fail_history.contains(channel) {
            return Err(Self::remote_error("groups.history", "missing_scope"));
        }
        Ok(self.history_for(channel))
    }

    async fn delete_message(&self, channel: &str, ts: &str) -> Result<(), TopicError> {
        self.record(Call::Delete {
            channel: channel.to_string(),
            ts: ts.to_string(),
        });
        if let Some(gate) = &self.delete_gate {
            gate.wait().await;
        }
        if self.fail_delete.contains(ts) {
            return Err(Self::remote_error("chat.delete", "cant_delete_message"));
        }
        Ok(())
    }
}

/// No subtype, an unrelated subtype, then two notices of `tag` at ts 2 and 3.
pub fn mixed_history(tag: &str) -> Vec<HistoryMessage> {
    vec![
        HistoryMessage::new("0", None),
        HistoryMessage::new("1", Some("something_random")),
        HistoryMessage::new("2", Some(tag)),
        HistoryMessage::new("3", Some(tag)),
    ]
}
