//! `/recommendations/*` facade.

use std::sync::Arc;

use super::fetch_list;
use crate::domain::ports::{ApiRequest, ApiTransport, TransportError};
use crate::domain::{FeedMode, Post};

/// Home feed for the signed-in user.
#[derive(Clone)]
pub struct FeedApi {
    transport: Arc<dyn ApiTransport>,
}

impl FeedApi {
    /// Facade over `transport`.
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// `GET /recommendations/foryou` or `/recommendations/following`.
    pub async fn feed(&self, mode: FeedMode) -> Result<Vec<Post>, TransportError> {
        fetch_list(
            self.transport.as_ref(),
            ApiRequest::get(["recommendations", mode.as_segment()]),
        )
        .await
    }
}
