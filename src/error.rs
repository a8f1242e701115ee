//! Error types for topic updates.

/// Failure of a topic update, either before any remote call or from Slack itself.
#[derive(Debug, thiserror::Error)]
pub enum TopicError {
    /// Missing or malformed input. Raised before anything is sent to Slack.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Slack answered, but reported `ok: false`.
    #[error("Slack API error on {method}: {message}")]
    Remote { method: String, message: String },

    /// The request never produced a usable Slack response.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl TopicError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
