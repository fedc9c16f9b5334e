//! Feed mode toggle.

use serde::{Deserialize, Serialize};

/// Which feed the home screen shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedMode {
    /// Posts from followed accounts.
    Following,
    /// Recommended posts.
    #[default]
    #[serde(rename = "foryou")]
    ForYou,
}

impl FeedMode {
    /// Path segment under `/recommendations`.
    pub const fn as_segment(self) -> &'static str {
        match self {
            Self::Following => "following",
            Self::ForYou => "foryou",
        }
    }
}
