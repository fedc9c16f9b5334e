//! User profile record as served by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile.
///
/// Identity is `id`; the client never checks uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    pub id: String,
    /// Public handle.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Profile photo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    /// Free-form profile text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Personal or business website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Self-reported location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Number of followers.
    pub followers_count: u32,
    /// Number of accounts followed.
    pub following_count: u32,
    /// Whether the account sells as a business.
    pub is_business_account: bool,
    /// Whether the account carries a verification badge.
    pub is_verified: bool,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}
