use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::{HistoryMessage, SlackTransport};
use crate::error::TopicError;

pub const DEFAULT_API_BASE: &str = "https://slack.com/api";

pub const SET_TOPIC_PUBLIC: &str = "channels.setTopic";
pub const SET_TOPIC_PRIVATE: &str = "groups.setTopic";
pub const HISTORY_PUBLIC: &str = "channels.history";
pub const HISTORY_PRIVATE: &str = "groups.history";
pub const CHAT_DELETE: &str = "chat.delete";

/// Connection settings for [`SlackClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Web API root, without the method name.
    pub api_base: String,
    /// Per-request timeout in seconds (0 = no timeout)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the Slack Web API.
#[derive(Clone)]
pub struct SlackClient {
    token: String,
    api_base: String,
    agent: ureq::Agent,
}

impl SlackClient {
    pub fn new(token: &str, config: &ClientConfig) -> Self {
        let timeout = (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));
        let agent_config = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .build();

        Self {
            token: token.trim().to_string(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            agent: ureq::Agent::new_with_config(agent_config),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build a full method URL.
    fn api_url(&self, method: &str) -> String {
        format!("{}/{}", self.api_base, method)
    }

    fn bearer_auth(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// POST a form to a Web API method and return the checked JSON body.
    ///
    /// ureq blocks, so the request runs on the blocking pool and the caller
    /// only awaits its completion.
    async fn call(
        &self,
        method: &'static str,
        form: Vec<(&'static str, String)>,
    ) -> Result<Value, TopicError> {
        let agent = self.agent.clone();
        let url = self.api_url(method);
        let auth = self.bearer_auth();
        debug!(method, "calling Slack");

        let body =
            tokio::task::spawn_blocking(move || post_form(&agent, &url, &auth, method, &form))
                .await
                .map_err(|e| {
                    TopicError::Transport(format!("{method} request task failed: {e}"))
                })??;
        check_response(&body, method)?;
        Ok(body)
    }
}

fn post_form(
    agent: &ureq::Agent,
    url: &str,
    auth: &str,
    method: &str,
    form: &[(&str, String)],
) -> Result<Value, TopicError> {
    let resp_str = agent
        .post(url)
        .header("Authorization", auth)
        .send_form(form.iter().map(|(key, value)| (*key, value.as_str())))
        .map_err(|e| TopicError::Transport(format!("POST {method} failed: {e}")))?
        .body_mut()
        .read_to_string()
        .map_err(|e| TopicError::Transport(format!("Failed to read {method} response body: {e}")))?;
    serde_json::from_str(&resp_str)
        .map_err(|e| TopicError::Transport(format!("Failed to parse {method} response JSON: {e}")))
}

/// Turn a Slack `{"ok": false, "error": ...}` body into an error.
pub fn check_response(json: &Value, method: &str) -> Result<(), TopicError> {
    if json["ok"].as_bool() != Some(true) {
        let message = json["error"].as_str().unwrap_or("unknown error");
        return Err(TopicError::Remote {
            method: method.to_string(),
            message: message.to_string(),
        });
    }
    Ok(())
}

/// Extract the `messages` array of a `*.history` response.
pub fn parse_history_response(
    json: &Value,
    method: &str,
) -> Result<Vec<HistoryMessage>, TopicError> {
    check_response(json, method)?;
    match json.get("messages") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(messages) => serde_json::from_value(messages.clone()).map_err(|e| {
            TopicError::Transport(format!("Unexpected {method} message list: {e}"))
        }),
    }
}

#[async_trait]
impl SlackTransport for SlackClient {
    async fn set_topic_public(&self, channel: &str, topic: &str) -> Result<(), TopicError> {
        self.call(
            SET_TOPIC_PUBLIC,
            vec![("channel", channel.to_string()), ("topic", topic.to_string())],
        )
        .await?;
        Ok(())
    }

    async fn set_topic_private(&self, channel: &str, topic: &str) -> Result<(), TopicError> {
        self.call(
            SET_TOPIC_PRIVATE,
            vec![("channel", channel.to_string()), ("topic", topic.to_string())],
        )
        .await?;
        Ok(())
    }

    async fn fetch_history_public(
        &self,
        channel: &str,
    ) -> Result<Vec<HistoryMessage>, TopicError> {
        let body = self
            .call(HISTORY_PUBLIC, vec![("channel", channel.to_string())])
            .await?;
        parse_history_response(&body, HISTORY_PUBLIC)
    }

    async fn fetch_history_private(
        &self,
        channel: &str,
    ) -> Result<Vec<HistoryMessage>, TopicError> {
        let body = self
            .call(HISTORY_PRIVATE, vec![("channel", channel.to_string())])
            .await?;
        parse_history_response(&body, HISTORY_PRIVATE)
    }

    async fn delete_message(&self, channel: &str, ts: &str) -> Result<(), TopicError> {
        self.call(
            CHAT_DELETE,
            vec![("channel", channel.to_string()), ("ts", ts.to_string())],
        )
        .await?;
        Ok(())
    }
}
