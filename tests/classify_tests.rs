use slack_topic::classify::{PRIVATE_TOPIC_SUBTYPE, PUBLIC_TOPIC_SUBTYPE};
use slack_topic::{classify, is_private, Visibility};

#[test]
fn test_private_channel_ids() {
    for id in ["G12345678", "G", "Gnot-a-real-channel", "G 1"] {
        assert_eq!(classify(id), Visibility::Private, "{id}");
        assert!(is_private(id));
    }
}

#[test]
fn test_public_channel_ids() {
    for id in ["C12345678", "D12345678", "g12345678", "12345678", "", " G1", "CG1"] {
        assert_eq!(classify(id), Visibility::Public, "{id:?}");
        assert!(!is_private(id));
    }
}

#[test]
fn test_notification_tags() {
    assert_eq!(Visibility::Public.notification_tag(), PUBLIC_TOPIC_SUBTYPE);
    assert_eq!(Visibility::Private.notification_tag(), PRIVATE_TOPIC_SUBTYPE);
    assert_eq!(Visibility::Public.notification_tag(), "channel_topic");
    assert_eq!(Visibility::Private.notification_tag(), "group_topic");
}

#[test]
fn test_visibility_display() {
    assert_eq!(Visibility::Public.to_string(), "public");
    assert_eq!(Visibility::Private.to_string(), "private");
}
