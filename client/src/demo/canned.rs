//! Records the demo facade synthesises instead of reading from fixtures.
//!
//! Comments, conversations and messages are fixed samples: the requested id
//! is echoed where the shape has room for it but never selects different
//! records.

use chrono::{DateTime, TimeDelta, Utc};
use demo_data::MockCategory;
use serde::{Deserialize, Serialize};

/// Payload for `create_post` in demo mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMockPost {
    /// Post body text.
    pub content: String,
    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Demo category.
    pub category: MockCategory,
    /// Hashtags without the leading `#`.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Result of `like_post`.
///
/// `likes` is random and not stored, so it disagrees with `get_post`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeOutcome {
    /// Always `true`.
    pub success: bool,
    /// Random count in `0..1000`.
    pub likes: u32,
}

/// A demo comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoComment {
    /// Identifier.
    pub id: String,
    /// Post the comment is attached to.
    pub post_id: String,
    /// Author id.
    pub user_id: String,
    /// Author handle.
    pub username: String,
    /// Comment body.
    pub content: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A demo inbox entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoConversation {
    /// Identifier.
    pub id: String,
    /// Other participant's id.
    pub user_id: String,
    /// Other participant's handle.
    pub username: String,
    /// Other participant's avatar URL.
    pub avatar: String,
    /// Most recent message text.
    pub last_message: String,
    /// Most recent message time.
    pub timestamp: DateTime<Utc>,
    /// Unread message count.
    pub unread: u32,
}

/// A demo message in a conversation thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoMessage {
    /// Identifier.
    pub id: String,
    /// Sender id.
    pub sender_id: String,
    /// Message body.
    pub content: String,
    /// Send time.
    pub timestamp: DateTime<Utc>,
}

pub(super) fn comments(post_id: &str, now: DateTime<Utc>) -> Vec<DemoComment> {
    vec![
        DemoComment {
            id: "1".to_owned(),
            post_id: post_id.to_owned(),
            user_id: "2".to_owned(),
            username: "art_collector".to_owned(),
            content: "This looks amazing! Great work!".to_owned(),
            created_at: now - TimeDelta::hours(1),
        },
        DemoComment {
            id: "2".to_owned(),
            post_id: post_id.to_owned(),
            user_id: "3".to_owned(),
            username: "nft_artist".to_owned(),
            content: "Love the creativity here. Inspiring!".to_owned(),
            created_at: now - TimeDelta::hours(2),
        },
    ]
}

pub(super) fn conversations(now: DateTime<Utc>) -> Vec<DemoConversation> {
    vec![DemoConversation {
        id: "1".to_owned(),
        user_id: "2".to_owned(),
        username: "art_collector".to_owned(),
        avatar: "https://i.pravatar.cc/150?img=2".to_owned(),
        last_message: "Hey, I love your design work!".to_owned(),
        timestamp: now - TimeDelta::minutes(30),
        unread: 2,
    }]
}

pub(super) fn messages(now: DateTime<Utc>) -> Vec<DemoMessage> {
    vec![
        DemoMessage {
            id: "1".to_owned(),
            sender_id: "2".to_owned(),
            content: "Hey, I love your design work!".to_owned(),
            timestamp: now - TimeDelta::hours(1),
        },
        DemoMessage {
            id: "2".to_owned(),
            sender_id: "1".to_owned(),
            content: "Thank you! Glad you appreciate it.".to_owned(),
            timestamp: now - TimeDelta::minutes(30),
        },
    ]
}
