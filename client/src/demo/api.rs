//! Offline facade serving fixture data behind artificial latency.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::SecondsFormat;
use demo_data::{DemoDataset, MockPost, MockUser};
use mockable::Clock;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::canned::{self, DemoComment, DemoConversation, DemoMessage, LikeOutcome, NewMockPost};
use super::{DemoApiError, DemoLatency, DemoOperation};
use crate::domain::Envelope;
use crate::domain::ports::LatencySleeper;

/// Upper bound (exclusive) of the random like count.
const LIKE_CEILING: u32 = 1000;

/// Demo-mode API: fixture lookups, each completing after its latency.
///
/// Posts created through [`DemoApi::create_post`] are appended to the
/// dataset, so later listings and lookups see them.
///
/// The signed-in account is copied out of the dataset once, in
/// [`DemoApi::new`]. Build a new facade to serve a different dataset or
/// current user.
pub struct DemoApi {
    dataset: Mutex<DemoDataset>,
    current_user: MockUser,
    sleeper: Arc<dyn LatencySleeper>,
    clock: Arc<dyn Clock>,
    latency: DemoLatency,
    likes: Mutex<SmallRng>,
}

impl DemoApi {
    /// Build a facade over `dataset`.
    ///
    /// The first user in the dataset acts as the signed-in account.
    ///
    /// # Errors
    ///
    /// Returns [`DemoApiError::NoCurrentUser`] when the dataset has no users.
    pub fn new(
        dataset: DemoDataset,
        sleeper: Arc<dyn LatencySleeper>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DemoApiError> {
        let current_user = dataset
            .users()
            .first()
            .cloned()
            .ok_or_else(DemoApiError::no_current_user)?;
        Ok(Self {
            dataset: Mutex::new(dataset),
            current_user,
            sleeper,
            clock,
            latency: DemoLatency::default(),
            likes: Mutex::new(SmallRng::from_entropy()),
        })
    }

    /// Replace the default latency tiers.
    #[must_use]
    pub fn with_latency(mut self, latency: DemoLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Seed the like-count generator for reproducible runs.
    #[must_use]
    pub fn with_like_seed(mut self, seed: u64) -> Self {
        self.likes = Mutex::new(SmallRng::seed_from_u64(seed));
        self
    }

    async fn pause(&self, operation: DemoOperation) {
        let latency = self.latency.for_operation(operation);
        debug!(
            operation = operation.as_str(),
            latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
            "demo call"
        );
        self.sleeper.sleep(latency).await;
    }

    fn dataset(&self) -> MutexGuard<'_, DemoDataset> {
        self.dataset.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// User with the given id.
    ///
    /// # Errors
    ///
    /// [`DemoApiError::UserNotFound`] when no user matches.
    pub async fn get_user(&self, id: &str) -> Result<Envelope<MockUser>, DemoApiError> {
        self.pause(DemoOperation::GetUser).await;
        self.dataset()
            .user(id)
            .cloned()
            .map(Envelope::new)
            .ok_or_else(|| DemoApiError::user_not_found(id))
    }

    /// The signed-in account: always the first fixture user.
    pub async fn get_current_user(&self) -> Envelope<MockUser> {
        self.pause(DemoOperation::GetCurrentUser).await;
        Envelope::new(self.current_user.clone())
    }

    /// Every user in fixture order.
    pub async fn get_users(&self) -> Envelope<Vec<MockUser>> {
        self.pause(DemoOperation::GetUsers).await;
        Envelope::new(self.dataset().users().to_vec())
    }

    /// Posts, optionally filtered by exact category name.
    pub async fn get_posts(&self, category: Option<&str>) -> Envelope<Vec<MockPost>> {
        self.pause(DemoOperation::GetPosts).await;
        Envelope::new(
            self.dataset()
                .posts(category)
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    /// Post with the given id.
    ///
    /// # Errors
    ///
    /// [`DemoApiError::PostNotFound`] when no post matches.
    pub async fn get_post(&self, id: &str) -> Result<Envelope<MockPost>, DemoApiError> {
        self.pause(DemoOperation::GetPost).await;
        self.dataset()
            .post_by_id(id)
            .cloned()
            .map(Envelope::new)
            .ok_or_else(|| DemoApiError::post_not_found(id))
    }

    /// Append a post authored by the signed-in account.
    ///
    /// The id is the post count plus one, so ids collide if posts are ever
    /// removed.
    pub async fn create_post(&self, new_post: NewMockPost) -> Envelope<MockPost> {
        self.pause(DemoOperation::CreatePost).await;
        let created_at = self
            .clock
            .utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut dataset = self.dataset();
        let post = MockPost {
            id: (dataset.post_count() + 1).to_string(),
            user_id: self.current_user.id.clone(),
            username: self.current_user.username.clone(),
            content: new_post.content,
            images: new_post.images,
            category: new_post.category,
            likes: 0,
            comments: 0,
            created_at,
            tags: new_post.tags,
        };
        dataset.push_post(post.clone());
        Envelope::new(post)
    }

    /// Pretend to like a post.
    ///
    /// Returns a random count and stores nothing; the id is not checked.
    pub async fn like_post(&self, id: &str) -> Envelope<LikeOutcome> {
        self.pause(DemoOperation::LikePost).await;
        let likes = self
            .likes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..LIKE_CEILING);
        debug!(post_id = id, likes, "demo like is not persisted");
        Envelope::new(LikeOutcome {
            success: true,
            likes,
        })
    }

    /// Two sample comments echoing `post_id`.
    pub async fn get_comments(&self, post_id: &str) -> Envelope<Vec<DemoComment>> {
        self.pause(DemoOperation::GetComments).await;
        Envelope::new(canned::comments(post_id, self.clock.utc()))
    }

    /// A comment by the signed-in account, id taken from the clock.
    pub async fn add_comment(&self, post_id: &str, content: &str) -> Envelope<DemoComment> {
        self.pause(DemoOperation::AddComment).await;
        let now = self.clock.utc();
        Envelope::new(DemoComment {
            id: now.timestamp_millis().to_string(),
            post_id: post_id.to_owned(),
            user_id: self.current_user.id.clone(),
            username: self.current_user.username.clone(),
            content: content.to_owned(),
            created_at: now,
        })
    }

    /// The sample inbox.
    pub async fn get_conversations(&self) -> Envelope<Vec<DemoConversation>> {
        self.pause(DemoOperation::GetConversations).await;
        Envelope::new(canned::conversations(self.clock.utc()))
    }

    /// The sample thread; `conversation_id` does not change the result.
    pub async fn get_messages(&self, conversation_id: &str) -> Envelope<Vec<DemoMessage>> {
        self.pause(DemoOperation::GetMessages).await;
        debug!(conversation_id, "serving sample thread");
        Envelope::new(canned::messages(self.clock.utc()))
    }

    /// Posts whose content or any tag contains `query`, ignoring case.
    pub async fn search(&self, query: &str) -> Envelope<Vec<MockPost>> {
        self.pause(DemoOperation::Search).await;
        Envelope::new(
            self.dataset()
                .all_posts()
                .iter()
                .filter(|post| post.mentions(query))
                .cloned()
                .collect(),
        )
    }
}
