//! `/auth/*` facade.

use std::sync::Arc;

use tracing::warn;

use super::fetch;
use crate::domain::ports::{
    AUTH_TOKEN_KEY, ApiRequest, ApiTransport, KeyValueStore, TransportError,
};
use crate::domain::{AuthSession, LoginCredentials, Registration, User};

/// Login, registration, logout and session lookup.
#[derive(Clone)]
pub struct AuthApi {
    transport: Arc<dyn ApiTransport>,
    store: Arc<dyn KeyValueStore>,
}

impl AuthApi {
    /// Facade over `transport`; `store` holds the bearer token.
    pub fn new(transport: Arc<dyn ApiTransport>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { transport, store }
    }

    /// `POST /auth/login`.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, TransportError> {
        let request = ApiRequest::post(["auth", "login"]).with_body(credentials.to_body());
        fetch(self.transport.as_ref(), request).await
    }

    /// `POST /auth/register`.
    pub async fn register(&self, registration: &Registration) -> Result<AuthSession, TransportError> {
        let request = ApiRequest::post(["auth", "register"]).with_body(registration.to_body());
        fetch(self.transport.as_ref(), request).await
    }

    /// `POST /auth/logout`, then drop the stored token.
    ///
    /// The token is removed whether or not the call succeeded; a failed
    /// call is still reported afterwards.
    pub async fn logout(&self) -> Result<(), TransportError> {
        let outcome = self.transport.send(ApiRequest::post(["auth", "logout"])).await;
        self.store.remove(AUTH_TOKEN_KEY);
        if let Err(error) = &outcome {
            warn!(%error, "logout call failed; local token cleared anyway");
        }
        outcome.map(drop)
    }

    /// `GET /auth/me`.
    pub async fn current_user(&self) -> Result<User, TransportError> {
        fetch(self.transport.as_ref(), ApiRequest::get(["auth", "me"])).await
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::api::test_fixtures::user_json;
    use crate::domain::ports::{HttpMethod, MockApiTransport, MockKeyValueStore};
    use rstest::rstest;
    use serde_json::json;

    fn untouched_store() -> Arc<dyn KeyValueStore> {
        let mut store = MockKeyValueStore::new();
        store.expect_remove().never();
        Arc::new(store)
    }

    fn clearing_store() -> Arc<dyn KeyValueStore> {
        let mut store = MockKeyValueStore::new();
        store
            .expect_remove()
            .withf(|key: &str| key == AUTH_TOKEN_KEY)
            .times(1)
            .return_const(());
        Arc::new(store)
    }

    #[tokio::test]
    async fn login_posts_credentials_and_decodes_session() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.method == HttpMethod::Post
                    && request.path() == "/auth/login"
                    && request.body == Some(json!({ "email": "a@b.c", "password": "pw" }))
            })
            .times(1)
            .returning(|_| Ok(json!({ "user": user_json("u1"), "token": "jwt" })));

        let api = AuthApi::new(Arc::new(transport), untouched_store());
        let creds = LoginCredentials::try_from_parts("a@b.c", "pw").expect("valid");
        let session = api.login(&creds).await.expect("login succeeds");

        assert_eq!(session.token, "jwt");
        assert_eq!(session.user.id, "u1");
    }

    #[tokio::test]
    async fn register_posts_the_sign_up_payload() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.path() == "/auth/register"
                    && request
                        .body
                        .as_ref()
                        .is_some_and(|body| body["username"] == "maker")
            })
            .times(1)
            .returning(|_| Ok(json!({ "user": user_json("u9"), "token": "fresh" })));

        let api = AuthApi::new(Arc::new(transport), untouched_store());
        let registration = Registration::try_from_parts("maker", "a@b.c", "pw").expect("valid");
        let session = api.register(&registration).await.expect("register succeeds");
        assert_eq!(session.token, "fresh");
    }

    #[rstest]
    #[case::success(Ok(serde_json::Value::Null))]
    #[case::network_failure(Err(TransportError::transport("connection refused")))]
    #[case::server_failure(Err(TransportError::status(500_u16, "boom")))]
    #[tokio::test]
    async fn logout_always_clears_the_token(
        #[case] outcome: Result<serde_json::Value, TransportError>,
    ) {
        let expected = outcome.clone().map(drop);
        let mut transport = MockApiTransport::new();
        transport
            .expect_send()
            .withf(|request| request.method == HttpMethod::Post && request.path() == "/auth/logout")
            .times(1)
            .returning(move |_| outcome.clone());

        let api = AuthApi::new(Arc::new(transport), clearing_store());
        assert_eq!(api.logout().await, expected);
    }

    #[tokio::test]
    async fn current_user_surfaces_transport_errors_unchanged() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_send()
            .withf(|request| request.method == HttpMethod::Get && request.path() == "/auth/me")
            .times(1)
            .returning(|_| Err(TransportError::status(401_u16, "Invalid token")));

        let api = AuthApi::new(Arc::new(transport), untouched_store());
        let err = api.current_user().await.expect_err("unauthorised");
        assert_eq!(err, TransportError::status(401_u16, "Invalid token"));
    }

    #[tokio::test]
    async fn mismatched_bodies_map_to_decode_errors() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(json!({ "unexpected": true })));

        let api = AuthApi::new(Arc::new(transport), untouched_store());
        let err = api.current_user().await.expect_err("wrong shape");
        assert!(matches!(err, TransportError::Decode { .. }));
    }
}
