// src/updater.rs
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::classify::{classify, Visibility};
use crate::error::TopicError;
use crate::transport::{HistoryMessage, SlackTransport};

/// What happened to one channel whose update went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelOutcome {
    pub channel: String,
    pub visibility: Visibility,
    /// Timestamps of the topic-change notices that were deleted.
    pub deleted: Vec<String>,
}

/// Messages in `history` that are topic-change notices for `visibility`.
///
/// Only an exact subtype match counts; messages without a subtype and other
/// system messages are left alone.
pub fn topic_notifications(
    history: &[HistoryMessage],
    visibility: Visibility,
) -> Vec<&HistoryMessage> {
    let tag = visibility.notification_tag();
    history
        .iter()
        .filter(|message| message.subtype.as_deref() == Some(tag))
        .collect()
}

/// Set one channel's topic, then delete the notice Slack posted about it.
///
/// Steps run in order: set topic, fetch history, delete. A failed topic
/// set stops everything; a failed history fetch leaves the new topic in
/// place. Deletes are issued together and all of them are awaited even if
/// some fail; the first failure (in history order) is then returned.
pub async fn update_channel(
    channel_id: &str,
    topic: &str,
    transport: &dyn SlackTransport,
) -> Result<ChannelOutcome, TopicError> {
    let visibility = classify(channel_id);

    debug!(channel = channel_id, %visibility, "setting topic");
    match visibility {
        Visibility::Public => transport.set_topic_public(channel_id, topic).await?,
        Visibility::Private => transport.set_topic_private(channel_id, topic).await?,
    }

    debug!(channel = channel_id, %visibility, "fetching history");
    let history = match visibility {
        Visibility::Public => transport.fetch_history_public(channel_id).await?,
        Visibility::Private => transport.fetch_history_private(channel_id).await?,
    };

    let notifications = topic_notifications(&history, visibility);
    debug!(
        channel = channel_id,
        count = notifications.len(),
        "deleting topic notifications"
    );
    let results = join_all(
        notifications
            .iter()
            .map(|message| transport.delete_message(channel_id, &message.ts)),
    )
    .await;

    let mut deleted = Vec::with_capacity(notifications.len());
    let mut first_error = None;
    for (message, result) in notifications.iter().zip(results) {
        match result {
            Ok(()) => deleted.push(message.ts.clone()),
            Err(e) => {
                warn!(
                    channel = channel_id,
                    ts = %message.ts,
                    error = %e,
                    "failed to delete topic notification"
                );
                first_error.get_or_insert(e);
            }
        }
    }
    if let Some(e) = first_error {
        return Err(e);
    }

    info!(
        channel = channel_id,
        deleted = deleted.len(),
        "topic updated"
    );
    Ok(ChannelOutcome {
        channel: channel_id.to_string(),
        visibility,
        deleted,
    })
}
