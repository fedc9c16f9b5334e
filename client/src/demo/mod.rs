//! Demo mode: the API surface served from in-memory fixtures.
//!
//! Every call sleeps for an operation-specific latency through the
//! [`LatencySleeper`](crate::domain::ports::LatencySleeper) port before
//! returning an [`Envelope`](crate::domain::Envelope). Only user and post
//! lookups can fail.

mod api;
mod canned;
mod dataset_file;
mod error;
mod latency;

pub use api::DemoApi;
pub use canned::{DemoComment, DemoConversation, DemoMessage, LikeOutcome, NewMockPost};
pub use dataset_file::{DatasetLoadError, load_dataset};
pub use error::DemoApiError;
pub use latency::{DemoLatency, DemoOperation};
