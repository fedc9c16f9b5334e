//! In-app notifications shown in the activity tray.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification, tagged by `kind` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Notification {
    /// Someone liked one of the user's posts.
    #[serde(rename_all = "camelCase")]
    Like {
        /// Liked post.
        post_id: String,
        /// Who liked it.
        from_user_id: String,
        /// When.
        at: DateTime<Utc>,
    },
    /// Someone commented on one of the user's posts.
    #[serde(rename_all = "camelCase")]
    Comment {
        /// Commented post.
        post_id: String,
        /// New comment.
        comment_id: String,
        /// Who commented.
        from_user_id: String,
        /// When.
        at: DateTime<Utc>,
    },
    /// Someone followed the user.
    #[serde(rename_all = "camelCase")]
    Follow {
        /// New follower.
        from_user_id: String,
        /// When.
        at: DateTime<Utc>,
    },
    /// A direct message arrived.
    #[serde(rename_all = "camelCase")]
    Message {
        /// Sender.
        from_user_id: String,
        /// Short excerpt of the message.
        preview: String,
        /// When.
        at: DateTime<Utc>,
    },
    /// A new bid was placed on one of the user's listings.
    #[serde(rename_all = "camelCase")]
    Bid {
        /// Listing bid on.
        listing_id: String,
        /// Bidder.
        from_user_id: String,
        /// Bid amount.
        amount: f64,
        /// When.
        at: DateTime<Utc>,
    },
}

impl Notification {
    /// When the notification was raised.
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Self::Like { at, .. }
            | Self::Comment { at, .. }
            | Self::Follow { at, .. }
            | Self::Message { at, .. }
            | Self::Bid { at, .. } => *at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_are_tagged_by_kind() {
        let raw = serde_json::json!({
            "kind": "follow",
            "fromUserId": "u2",
            "at": "2026-01-07T10:30:00Z"
        });
        let notification: Notification = serde_json::from_value(raw.clone()).expect("decode");
        assert!(matches!(notification, Notification::Follow { .. }));
        assert_eq!(serde_json::to_value(&notification).expect("encode"), raw);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let raw = serde_json::json!({ "kind": "poke", "at": "2026-01-07T10:30:00Z" });
        assert!(serde_json::from_value::<Notification>(raw).is_err());
    }
}
