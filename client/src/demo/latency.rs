//! Per-operation artificial latency.

use std::time::Duration;

/// Every call the demo facade exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoOperation {
    /// `get_user`
    GetUser,
    /// `get_current_user`
    GetCurrentUser,
    /// `get_users`
    GetUsers,
    /// `get_posts`
    GetPosts,
    /// `get_post`
    GetPost,
    /// `create_post`
    CreatePost,
    /// `like_post`
    LikePost,
    /// `get_comments`
    GetComments,
    /// `add_comment`
    AddComment,
    /// `get_conversations`
    GetConversations,
    /// `get_messages`
    GetMessages,
    /// `search`
    Search,
}

impl DemoOperation {
    /// Snake-case name used in log events.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetUser => "get_user",
            Self::GetCurrentUser => "get_current_user",
            Self::GetUsers => "get_users",
            Self::GetPosts => "get_posts",
            Self::GetPost => "get_post",
            Self::CreatePost => "create_post",
            Self::LikePost => "like_post",
            Self::GetComments => "get_comments",
            Self::AddComment => "add_comment",
            Self::GetConversations => "get_conversations",
            Self::GetMessages => "get_messages",
            Self::Search => "search",
        }
    }
}

/// Delay tiers applied before each demo call completes.
///
/// Defaults: 300 ms for lookups, 400 ms for search, 500 ms for feed loads
/// and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoLatency {
    /// Single-record reads, likes, comments and messages.
    pub lookup: Duration,
    /// Full-text search.
    pub search: Duration,
    /// Feed listing, post creation and comment creation.
    pub bulk: Duration,
}

impl Default for DemoLatency {
    fn default() -> Self {
        Self {
            lookup: Duration::from_millis(300),
            search: Duration::from_millis(400),
            bulk: Duration::from_millis(500),
        }
    }
}

impl DemoLatency {
    /// Delay for `operation`.
    pub const fn for_operation(&self, operation: DemoOperation) -> Duration {
        match operation {
            DemoOperation::GetPosts | DemoOperation::CreatePost | DemoOperation::AddComment => {
                self.bulk
            }
            DemoOperation::Search => self.search,
            DemoOperation::GetUser
            | DemoOperation::GetCurrentUser
            | DemoOperation::GetUsers
            | DemoOperation::GetPost
            | DemoOperation::LikePost
            | DemoOperation::GetComments
            | DemoOperation::GetConversations
            | DemoOperation::GetMessages => self.lookup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DemoOperation::GetUser, 300)]
    #[case(DemoOperation::GetCurrentUser, 300)]
    #[case(DemoOperation::GetUsers, 300)]
    #[case(DemoOperation::GetPosts, 500)]
    #[case(DemoOperation::GetPost, 300)]
    #[case(DemoOperation::CreatePost, 500)]
    #[case(DemoOperation::LikePost, 300)]
    #[case(DemoOperation::GetComments, 300)]
    #[case(DemoOperation::AddComment, 500)]
    #[case(DemoOperation::GetConversations, 300)]
    #[case(DemoOperation::GetMessages, 300)]
    #[case(DemoOperation::Search, 400)]
    fn default_latency_per_operation(#[case] operation: DemoOperation, #[case] millis: u64) {
        assert_eq!(
            DemoLatency::default().for_operation(operation),
            Duration::from_millis(millis)
        );
    }
}
