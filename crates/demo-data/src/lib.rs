//! Static demo data for the ReaVise offline demo mode.
//!
//! This crate holds the fixture users and posts served when the client runs
//! without a backend, plus the lookup functions the demo facade builds on. It
//! is deliberately independent of the client's live domain types: the demo
//! shapes use their own field names and category spellings.
//!
//! # Overview
//!
//! - [`MockUser`] and [`MockPost`] describe the demo records.
//! - [`DemoDataset`] is an ordered, owned collection with linear lookups.
//! - [`get_mock_user`], [`get_mock_posts`] and [`get_mock_post_by_id`] query
//!   the bundled fixture directly.
//!
//! # Example
//!
//! ```
//! use demo_data::{get_mock_post_by_id, get_mock_posts, get_mock_user};
//!
//! assert_eq!(get_mock_posts(None).len(), 6);
//! assert_eq!(get_mock_posts(Some("Design")).len(), 3);
//! assert_eq!(
//!     get_mock_user("2").map(|user| user.username.as_str()),
//!     Some("art_collector")
//! );
//! assert!(get_mock_post_by_id("99").is_none());
//! ```

mod dataset;
mod error;
mod fixtures;
mod model;

pub use dataset::{
    DATASET_VERSION, DemoDataset, bundled_dataset, get_mock_post_by_id, get_mock_posts,
    get_mock_user,
};
pub use error::DatasetError;
pub use model::{MockCategory, MockPost, MockUser};
