// src/orchestrator.rs
use futures::future::join_all;
use tracing::warn;

use crate::error::TopicError;
use crate::request::{TopicUpdateRequest, ValidatedRequest};
use crate::transport::slack::{ClientConfig, SlackClient};
use crate::transport::SlackTransport;
use crate::updater::{update_channel, ChannelOutcome};

/// Update the topic of every channel in `request`.
///
/// Without a `transport`, a [`SlackClient`] is built from the request's
/// token using the default [`ClientConfig`].
pub async fn update(
    request: &TopicUpdateRequest,
    transport: Option<&dyn SlackTransport>,
) -> Result<Vec<ChannelOutcome>, TopicError> {
    update_with_config(request, transport, &ClientConfig::default()).await
}

/// Like [`update`], with explicit settings for the fallback client.
pub async fn update_with_config(
    request: &TopicUpdateRequest,
    transport: Option<&dyn SlackTransport>,
    config: &ClientConfig,
) -> Result<Vec<ChannelOutcome>, TopicError> {
    let validated = request.validate()?;

    let default_client;
    let transport = match transport {
        Some(transport) => transport,
        None => {
            default_client = SlackClient::new(&validated.token, config);
            &default_client as &dyn SlackTransport
        }
    };

    run(&validated, transport).await
}

/// Run every selected channel concurrently and wait for all of them.
///
/// A failing channel neither cancels nor rolls back the others; the first
/// failure in request order is returned once everything has settled.
async fn run(
    validated: &ValidatedRequest,
    transport: &dyn SlackTransport,
) -> Result<Vec<ChannelOutcome>, TopicError> {
    let channels = validated.selection.channels();
    let topic = validated.topic.as_str();

    let results = join_all(
        channels
            .iter()
            .map(|channel| update_channel(channel, topic, transport)),
    )
    .await;

    let mut outcomes = Vec::with_capacity(results.len());
    let mut first_error = None;
    for (channel, result) in channels.iter().zip(results) {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                warn!(channel = %channel, error = %e, "channel update failed");
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(outcomes),
    }
}
