//! Feed posts and their media.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Post category on the live API.
///
/// Kept separate from the demo fixtures' `TheLot`/`Design`/`ReaVise`
/// spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Items looking for a makeover.
    Lot,
    /// Design work and concepts.
    Design,
    /// Completed before/after projects.
    Reavise,
}

impl Category {
    /// Wire spelling, as used in query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lot => "lot",
            Self::Design => "design",
            Self::Reavise => "reavise",
        }
    }
}

/// Kind of media attached to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Still image.
    Image,
    /// Video clip.
    Video,
}

/// One media attachment, embedded in a [`Post`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Asset URL.
    pub url: String,
    /// Asset kind.
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Optional per-item category, e.g. "before" shots in a reavise post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// A feed post.
///
/// `user_id` is not checked against any user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Backend identifier.
    pub id: String,
    /// Author id.
    pub user_id: String,
    /// Author handle, denormalised.
    pub username: String,
    /// Author avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    /// Author location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_location: Option<String>,
    /// Attachments in display order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub media: Vec<MediaItem>,
    /// Post body text.
    pub description: String,
    /// Feed section.
    pub category: Category,
    /// Hashtags without the leading `#`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hashtags: Vec<String>,
    /// Like count.
    pub likes_count: u32,
    /// Comment count.
    pub comments_count: u32,
    /// Whether the signed-in user liked this post.
    #[serde(default)]
    pub is_liked: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Accept `null` where a list is expected; the backend emits nil slices as
/// `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Typed payload for `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    /// Attachments in display order.
    pub media: Vec<MediaItem>,
    /// Post body text.
    pub description: String,
    /// Feed section.
    pub category: Category,
    /// Hashtags without the leading `#`.
    pub hashtags: Vec<String>,
}

/// Filters for `GET /posts`. Empty filters are omitted from the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    /// Only posts in this category.
    pub category: Option<Category>,
    /// Only posts by this author.
    pub user_id: Option<String>,
}

impl PostQuery {
    /// Query-string pairs for the set filters.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category".to_owned(), category.as_str().to_owned()));
        }
        if let Some(user_id) = self.user_id.as_deref().filter(|id| !id.is_empty()) {
            pairs.push(("userId".to_owned(), user_id.to_owned()));
        }
        pairs
    }
}
