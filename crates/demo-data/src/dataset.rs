//! Ordered demo dataset and its lookups.
//!
//! Lookups are linear scans in declared order. Nothing here enforces id
//! uniqueness or referential integrity between posts and users; those hold
//! only by convention of the fixture data.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::DatasetError;
use crate::fixtures;
use crate::model::{MockPost, MockUser};

/// Dataset document version understood by [`DemoDataset::from_json`].
pub const DATASET_VERSION: u32 = 1;

static BUNDLED: OnceLock<DemoDataset> = OnceLock::new();

/// An ordered, owned collection of demo users and posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoDataset {
    users: Vec<MockUser>,
    posts: Vec<MockPost>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetDocument {
    version: u32,
    users: Vec<MockUser>,
    posts: Vec<MockPost>,
}

impl DemoDataset {
    /// Build a dataset from explicit records, keeping their order.
    #[must_use]
    pub const fn new(users: Vec<MockUser>, posts: Vec<MockPost>) -> Self {
        Self { users, posts }
    }

    /// The fixture shipped with this crate.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(fixtures::users(), fixtures::posts())
    }

    /// Parse a dataset document of the form
    /// `{ "version": 1, "users": [...], "posts": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Parse`] for malformed JSON and
    /// [`DatasetError::UnsupportedVersion`] for any version other than
    /// [`DATASET_VERSION`].
    ///
    /// # Example
    ///
    /// ```
    /// use demo_data::DemoDataset;
    ///
    /// let dataset = DemoDataset::from_json(r#"{"version": 1, "users": [], "posts": []}"#)
    ///     .expect("valid dataset");
    /// assert_eq!(dataset.post_count(), 0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let document: DatasetDocument =
            serde_json::from_str(json).map_err(|err| DatasetError::Parse {
                message: err.to_string(),
            })?;
        if document.version != DATASET_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: DATASET_VERSION,
                actual: document.version,
            });
        }
        Ok(Self::new(document.users, document.posts))
    }

    /// All users in declared order.
    #[must_use]
    pub fn users(&self) -> &[MockUser] {
        &self.users
    }

    /// All posts in declared order.
    #[must_use]
    pub fn all_posts(&self) -> &[MockPost] {
        &self.posts
    }

    /// Number of posts currently held.
    #[must_use]
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// First user whose id equals `id`.
    #[must_use]
    pub fn user(&self, id: &str) -> Option<&MockUser> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Posts filtered by exact, case-sensitive category name.
    ///
    /// `None` and the empty string both mean "no filter" and yield every
    /// post in declared order.
    #[must_use]
    pub fn posts(&self, category: Option<&str>) -> Vec<&MockPost> {
        match category.filter(|name| !name.is_empty()) {
            Some(name) => self
                .posts
                .iter()
                .filter(|post| post.category.as_str() == name)
                .collect(),
            None => self.posts.iter().collect(),
        }
    }

    /// First post whose id equals `id`.
    #[must_use]
    pub fn post_by_id(&self, id: &str) -> Option<&MockPost> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Append a post to the end of the list.
    pub fn push_post(&mut self, post: MockPost) {
        self.posts.push(post);
    }
}

impl Default for DemoDataset {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Shared read-only view of the bundled fixture.
#[must_use]
pub fn bundled_dataset() -> &'static DemoDataset {
    BUNDLED.get_or_init(DemoDataset::bundled)
}

/// Look up a bundled user by id.
#[must_use]
pub fn get_mock_user(id: &str) -> Option<&'static MockUser> {
    bundled_dataset().user(id)
}

/// Bundled posts, optionally filtered by exact category name.
#[must_use]
pub fn get_mock_posts(category: Option<&str>) -> Vec<&'static MockPost> {
    bundled_dataset().posts(category)
}

/// Look up a bundled post by id.
#[must_use]
pub fn get_mock_post_by_id(id: &str) -> Option<&'static MockPost> {
    bundled_dataset().post_by_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MockCategory;
    use rstest::rstest;

    fn ids(posts: &[&MockPost]) -> Vec<String> {
        posts.iter().map(|post| post.id.clone()).collect()
    }

    #[rstest]
    #[case("1", "creative_designer")]
    #[case("2", "art_collector")]
    #[case("3", "nft_artist")]
    fn known_user_ids_resolve_to_matching_record(#[case] id: &str, #[case] username: &str) {
        let user = get_mock_user(id).expect("fixture user exists");
        assert_eq!(user.id, id);
        assert_eq!(user.username, username);
    }

    #[rstest]
    #[case("0")]
    #[case("4")]
    #[case("")]
    #[case(" 1")]
    fn unknown_user_ids_are_absent(#[case] id: &str) {
        assert!(get_mock_user(id).is_none());
    }

    #[test]
    fn unfiltered_posts_keep_declared_order() {
        let posts = get_mock_posts(None);
        assert_eq!(ids(&posts), ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn empty_category_means_no_filter() {
        assert_eq!(get_mock_posts(Some("")).len(), 6);
    }

    #[rstest]
    #[case("Design", &["1", "3", "6"])]
    #[case("TheLot", &["2"])]
    #[case("ReaVise", &["4", "5"])]
    #[case("design", &[])]
    #[case("Des", &[])]
    fn category_filter_is_exact_and_order_preserving(
        #[case] category: &str,
        #[case] expected: &[&str],
    ) {
        let posts = get_mock_posts(Some(category));
        assert_eq!(ids(&posts), expected);
    }

    #[test]
    fn post_lookup_by_id() {
        let post = get_mock_post_by_id("4").expect("fixture post exists");
        assert_eq!(post.category, MockCategory::ReaVise);
        assert_eq!(post.images.len(), 2);
        assert!(get_mock_post_by_id("7").is_none());
    }

    #[test]
    fn pushed_posts_are_appended() {
        let mut dataset = DemoDataset::bundled();
        let mut post = dataset.post_by_id("1").expect("fixture post").clone();
        post.id = "7".to_owned();
        dataset.push_post(post);

        assert_eq!(dataset.post_count(), 7);
        assert_eq!(
            dataset.all_posts().last().map(|post| post.id.as_str()),
            Some("7")
        );
        assert_eq!(bundled_dataset().post_count(), 6, "bundled data is untouched");
    }

    #[test]
    fn from_json_round_trips_a_document() {
        let json = r#"{
            "version": 1,
            "users": [{"id": "u", "username": "solo", "email": "solo@example.com",
                       "followers": 1, "following": 2}],
            "posts": [{"id": "p", "userId": "u", "username": "solo", "content": "hi",
                       "images": [], "category": "TheLot", "likes": 0, "comments": 0,
                       "createdAt": "2026-01-01T00:00:00Z", "tags": []}]
        }"#;

        let dataset = DemoDataset::from_json(json).expect("valid document");
        assert_eq!(dataset.users().len(), 1);
        assert!(dataset.user("u").is_some_and(|user| user.avatar.is_none()));
        assert_eq!(ids(&dataset.posts(Some("TheLot"))), ["p"]);
    }

    #[test]
    fn from_json_rejects_other_versions() {
        let err = DemoDataset::from_json(r#"{"version": 2, "users": [], "posts": []}"#)
            .expect_err("version 2 is unsupported");
        assert_eq!(
            err,
            DatasetError::UnsupportedVersion {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn from_json_reports_malformed_documents() {
        let err = DemoDataset::from_json("{").expect_err("truncated JSON");
        assert!(matches!(err, DatasetError::Parse { .. }));
    }
}
