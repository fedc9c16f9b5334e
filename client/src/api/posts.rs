//! `/posts/*` facade.

use std::sync::Arc;

use super::{fetch, fetch_list};
use crate::domain::ports::{ApiRequest, ApiTransport, TransportError};
use crate::domain::{Acknowledgement, NewPost, Post, PostQuery};

/// Feed listing, lookup, creation and likes.
#[derive(Clone)]
pub struct PostsApi {
    transport: Arc<dyn ApiTransport>,
}

impl PostsApi {
    /// Facade over `transport`.
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// `GET /posts`, newest first, filtered by `query`.
    pub async fn list(&self, query: &PostQuery) -> Result<Vec<Post>, TransportError> {
        let request = ApiRequest::get(["posts"]).with_query(query.pairs());
        fetch_list(self.transport.as_ref(), request).await
    }

    /// `GET /posts/{id}`.
    pub async fn get(&self, id: &str) -> Result<Post, TransportError> {
        fetch(self.transport.as_ref(), ApiRequest::get(["posts", id])).await
    }

    /// `POST /posts`.
    pub async fn create(&self, post: &NewPost) -> Result<Post, TransportError> {
        let body = serde_json::to_value(post).map_err(|error| {
            TransportError::invalid_request(format!("post payload not serialisable: {error}"))
        })?;
        fetch(self.transport.as_ref(), ApiRequest::post(["posts"]).with_body(body)).await
    }

    /// `POST /posts/{id}/like`. A repeated like fails with status 409.
    pub async fn like(&self, id: &str) -> Result<Acknowledgement, TransportError> {
        fetch(self.transport.as_ref(), ApiRequest::post(["posts", id, "like"])).await
    }
}
