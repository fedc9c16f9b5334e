//! `/comments/*` facade.

use std::sync::Arc;

use serde_json::json;

use super::{fetch, fetch_list};
use crate::domain::ports::{ApiRequest, ApiTransport, TransportError};
use crate::domain::{Acknowledgement, Comment};

/// Comment threads on posts.
#[derive(Clone)]
pub struct CommentsApi {
    transport: Arc<dyn ApiTransport>,
}

impl CommentsApi {
    /// Facade over `transport`.
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// `GET /comments/post/{post_id}`, oldest first.
    pub async fn list(&self, post_id: &str) -> Result<Vec<Comment>, TransportError> {
        fetch_list(
            self.transport.as_ref(),
            ApiRequest::get(["comments", "post", post_id]),
        )
        .await
    }

    /// `POST /comments/post/{post_id}` with `{ "text": ... }`.
    pub async fn create(&self, post_id: &str, text: &str) -> Result<Comment, TransportError> {
        let request =
            ApiRequest::post(["comments", "post", post_id]).with_body(json!({ "text": text }));
        fetch(self.transport.as_ref(), request).await
    }

    /// `DELETE /comments/{id}`. Only the author may delete (403 otherwise).
    pub async fn delete(&self, id: &str) -> Result<Acknowledgement, TransportError> {
        fetch(self.transport.as_ref(), ApiRequest::delete(["comments", id])).await
    }
}
