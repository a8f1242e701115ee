// src/classify.rs

/// Leading character of private channel ids (e.g. `G12345678`).
pub const PRIVATE_MARKER: char = 'G';

/// Message subtype Slack uses for topic changes in public channels.
pub const PUBLIC_TOPIC_SUBTYPE: &str = "channel_topic";

/// Message subtype Slack uses for topic changes in private channels.
pub const PRIVATE_TOPIC_SUBTYPE: &str = "group_topic";

/// Which Web API method family a channel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// Subtype of the notice Slack posts when this kind of channel's topic changes.
    pub fn notification_tag(self) -> &'static str {
        match self {
            Visibility::Public => PUBLIC_TOPIC_SUBTYPE,
            Visibility::Private => PRIVATE_TOPIC_SUBTYPE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a channel id by its first character only.
///
/// Nothing else about the id is checked: `"Gnot-a-channel"` is private and
/// the empty string is public.
pub fn classify(channel_id: &str) -> Visibility {
    if channel_id.starts_with(PRIVATE_MARKER) {
        Visibility::Private
    } else {
        Visibility::Public
    }
}

pub fn is_private(channel_id: &str) -> bool {
    classify(channel_id) == Visibility::Private
}
