//! `/messages/*` facade.

use std::sync::Arc;

use serde_json::{Map, Value, json};

use super::{fetch, fetch_list};
use crate::domain::Message;
use crate::domain::ports::{ApiRequest, ApiTransport, TransportError};

/// Direct messages.
#[derive(Clone)]
pub struct MessagesApi {
    transport: Arc<dyn ApiTransport>,
}

impl MessagesApi {
    /// Facade over `transport`.
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// `POST /messages`.
    pub async fn send(&self, receiver_id: &str, text: &str) -> Result<Message, TransportError> {
        let request = ApiRequest::post(["messages"])
            .with_body(json!({ "receiverId": receiver_id, "text": text }));
        fetch(self.transport.as_ref(), request).await
    }

    /// `GET /messages/conversations`.
    ///
    /// Entries are aggregation results whose shape the backend does not pin
    /// down, so they stay as JSON objects.
    pub async fn conversations(&self) -> Result<Vec<Map<String, Value>>, TransportError> {
        fetch_list(
            self.transport.as_ref(),
            ApiRequest::get(["messages", "conversations"]),
        )
        .await
    }

    /// `GET /messages/{user_id}`: the thread with one user, oldest first.
    pub async fn thread(&self, user_id: &str) -> Result<Vec<Message>, TransportError> {
        fetch_list(self.transport.as_ref(), ApiRequest::get(["messages", user_id])).await
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{HttpMethod, MockApiTransport};

    fn message_json() -> Value {
        json!({
            "id": "m1",
            "senderId": "u1",
            "receiverId": "u2",
            "text": "Still available?",
            "isRead": false,
            "createdAt": "2026-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn send_posts_receiver_and_text() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.method == HttpMethod::Post
                    && request.path() == "/messages"
                    && request.body == Some(json!({ "receiverId": "u2", "text": "Still available?" }))
            })
            .times(1)
            .returning(|_| Ok(message_json()));

        let api = MessagesApi::new(Arc::new(transport));
        let message = api.send("u2", "Still available?").await.expect("sent");
        assert_eq!(message.receiver_id, "u2");
    }

    #[tokio::test]
    async fn conversations_stay_opaque_objects() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_send()
            .withf(|request| request.path() == "/messages/conversations")
            .times(1)
            .returning(|_| Ok(json!([{ "_id": "u2", "lastMessage": { "text": "hi" }, "unread": 1 }])));

        let api = MessagesApi::new(Arc::new(transport));
        let conversations = api.conversations().await.expect("listed");
        assert_eq!(conversations.first().and_then(|c| c.get("unread")), Some(&json!(1)));
    }

    #[tokio::test]
    async fn thread_uses_the_other_user_id() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_send()
            .withf(|request| request.method == HttpMethod::Get && request.path() == "/messages/u2")
            .times(1)
            .returning(|_| Ok(json!([message_json()])));

        let api = MessagesApi::new(Arc::new(transport));
        assert_eq!(api.thread("u2").await.expect("thread").len(), 1);
    }
}
