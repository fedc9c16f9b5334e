//! Comments and direct messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Backend identifier.
    pub id: String,
    /// Post the comment belongs to.
    pub post_id: String,
    /// Author id.
    pub user_id: String,
    /// Author handle.
    pub username: String,
    /// Author avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    /// Comment body.
    pub text: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A direct message between two users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Backend identifier.
    pub id: String,
    /// Sender id.
    pub sender_id: String,
    /// Recipient id.
    pub receiver_id: String,
    /// Message body.
    pub text: String,
    /// Whether the recipient has read it.
    #[serde(default)]
    pub is_read: bool,
    /// Send time.
    pub created_at: DateTime<Utc>,
}
