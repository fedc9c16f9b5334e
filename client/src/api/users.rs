//! `/users/*` facade.

use std::sync::Arc;

use super::fetch;
use crate::domain::ports::{ApiRequest, ApiTransport, TransportError};
use crate::domain::{Acknowledgement, User};

/// Profiles and follow relationships.
#[derive(Clone)]
pub struct UsersApi {
    transport: Arc<dyn ApiTransport>,
}

impl UsersApi {
    /// Facade over `transport`.
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// `GET /users/{id}`.
    pub async fn get(&self, id: &str) -> Result<User, TransportError> {
        fetch(self.transport.as_ref(), ApiRequest::get(["users", id])).await
    }

    /// `POST /users/{id}/follow`.
    pub async fn follow(&self, id: &str) -> Result<Acknowledgement, TransportError> {
        fetch(self.transport.as_ref(), ApiRequest::post(["users", id, "follow"])).await
    }

    /// `DELETE /users/{id}/follow`.
    pub async fn unfollow(&self, id: &str) -> Result<Acknowledgement, TransportError> {
        fetch(self.transport.as_ref(), ApiRequest::delete(["users", id, "follow"])).await
    }
}
