//! Live REST facades.
//!
//! Each facade turns typed calls into [`ApiRequest`]s for the
//! [`ApiTransport`] port and decodes the returned JSON into domain types.
//! Transport errors pass through unchanged: there are no retries and no
//! reclassification beyond what the adapter already did.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::ports::{ApiRequest, ApiTransport, KeyValueStore, TransportError};

mod auth;
mod comments;
mod feed;
mod messages;
mod posts;
mod users;

pub use auth::AuthApi;
pub use comments::CommentsApi;
pub use feed::FeedApi;
pub use messages::MessagesApi;
pub use posts::PostsApi;
pub use users::UsersApi;

/// Every live facade, sharing one transport.
#[derive(Clone)]
pub struct LiveApi {
    /// `/auth/*`
    pub auth: AuthApi,
    /// `/posts/*`
    pub posts: PostsApi,
    /// `/comments/*`
    pub comments: CommentsApi,
    /// `/users/*`
    pub users: UsersApi,
    /// `/messages/*`
    pub messages: MessagesApi,
    /// `/recommendations/*`
    pub feed: FeedApi,
}

impl LiveApi {
    /// Wire every facade to `transport`; `store` backs the auth token.
    pub fn new(transport: Arc<dyn ApiTransport>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            auth: AuthApi::new(Arc::clone(&transport), store),
            posts: PostsApi::new(Arc::clone(&transport)),
            comments: CommentsApi::new(Arc::clone(&transport)),
            users: UsersApi::new(Arc::clone(&transport)),
            messages: MessagesApi::new(Arc::clone(&transport)),
            feed: FeedApi::new(transport),
        }
    }
}

async fn fetch<T: DeserializeOwned>(
    transport: &dyn ApiTransport,
    request: ApiRequest,
) -> Result<T, TransportError> {
    let path = request.path();
    let body = transport.send(request).await?;
    decode(&path, body)
}

/// List endpoints answer `null` instead of `[]` when nothing matches.
async fn fetch_list<T: DeserializeOwned>(
    transport: &dyn ApiTransport,
    request: ApiRequest,
) -> Result<Vec<T>, TransportError> {
    let path = request.path();
    let body = transport.send(request).await?;
    if body.is_null() {
        return Ok(Vec::new());
    }
    decode(&path, body)
}

fn decode<T: DeserializeOwned>(path: &str, body: Value) -> Result<T, TransportError> {
    serde_json::from_value(body).map_err(|error| {
        TransportError::decode(format!("unexpected response shape from {path}: {error}"))
    })
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    //! JSON bodies shared by facade tests.

    use serde_json::{Value, json};

    pub fn user_json(id: &str) -> Value {
        json!({
            "id": id,
            "username": format!("user_{id}"),
            "email": format!("{id}@reavise.test"),
            "followersCount": 1,
            "followingCount": 2,
            "isBusinessAccount": false,
            "isVerified": false,
            "createdAt": "2026-01-01T00:00:00Z"
        })
    }

    pub fn post_json(id: &str) -> Value {
        json!({
            "id": id,
            "userId": "u1",
            "username": "user_u1",
            "media": [],
            "description": "Walnut sideboard",
            "category": "lot",
            "hashtags": [],
            "likesCount": 0,
            "commentsCount": 0,
            "createdAt": "2026-01-01T00:00:00Z"
        })
    }
}
