//! Demo record shapes.
//!
//! Field names follow the demo wire format (`followers`, `content`, `tags`)
//! rather than the live API's (`followersCount`, `description`, `hashtags`).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Post category as spelled by the demo fixtures.
///
/// The live API spells its categories `lot`, `design` and `reavise`; the two
/// enums are kept apart until product confirms they describe the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MockCategory {
    /// Items looking for a makeover.
    TheLot,
    /// Design work and concepts.
    Design,
    /// Completed before/after projects.
    ReaVise,
}

impl MockCategory {
    /// Wire spelling of the category, used for exact-match filtering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TheLot => "TheLot",
            Self::Design => "Design",
            Self::ReaVise => "ReaVise",
        }
    }
}

impl fmt::Display for MockCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A demo user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockUser {
    /// Identifier, unique by convention of the fixture only.
    pub id: String,
    /// Public handle.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Free-form profile text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Follower count.
    pub followers: u32,
    /// Following count.
    pub following: u32,
}

/// A demo feed post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockPost {
    /// Identifier, unique by convention of the fixture only.
    pub id: String,
    /// Author id; not checked against the user list.
    pub user_id: String,
    /// Author handle, denormalised.
    pub username: String,
    /// Post body text.
    pub content: String,
    /// Image URLs in display order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
    /// Demo category.
    pub category: MockCategory,
    /// Like count at fixture time.
    pub likes: u32,
    /// Comment count at fixture time.
    pub comments: u32,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// Hashtags without the leading `#`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

impl MockPost {
    /// Whether the content or any tag contains `needle`, ignoring case.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        let lowered = needle.to_lowercase();
        self.content.to_lowercase().contains(&lowered)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&lowered))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
