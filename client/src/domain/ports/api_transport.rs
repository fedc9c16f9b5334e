//! Driven port for calling the ReaVise REST backend.
//!
//! Facades describe a request as a method, path segments, query pairs and an
//! optional JSON body. Adapters own URL joining, authentication headers and
//! mapping of transport failures into [`TransportError`].

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;

/// HTTP verbs used by the facades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Upper-case verb.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A backend call relative to the API base URL.
///
/// # Examples
/// ```
/// use reavise_client::domain::ports::{ApiRequest, HttpMethod};
///
/// let request = ApiRequest::post(["posts", "42", "like"]);
/// assert_eq!(request.method, HttpMethod::Post);
/// assert_eq!(request.path(), "/posts/42/like");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Verb.
    pub method: HttpMethod,
    /// Unencoded path segments, joined with `/` by the adapter.
    pub segments: Vec<String>,
    /// Query-string pairs in order.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Build a body-less request.
    pub fn new<I, S>(method: HttpMethod, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// `GET` shorthand.
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Get, segments)
    }

    /// `POST` shorthand.
    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Post, segments)
    }

    /// `DELETE` shorthand.
    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Delete, segments)
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append query pairs.
    #[must_use]
    pub fn with_query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Slash-joined path, for logs and assertions.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}

define_port_error! {
    /// Errors surfaced while calling the backend.
    pub enum TransportError {
        /// Connection failed before a response arrived.
        Transport { message: String } =>
            "backend transport failed: {message}",
        /// Request exceeded the configured timeout.
        Timeout { message: String } =>
            "backend timeout: {message}",
        /// Backend answered with a non-success status.
        Status { status: u16, message: String } =>
            "backend returned status {status}: {message}",
        /// Response body could not be decoded.
        Decode { message: String } =>
            "backend response decode failed: {message}",
        /// Adapter rejected the request before sending it.
        InvalidRequest { message: String } =>
            "backend request invalid: {message}",
    }
}

impl TransportError {
    /// HTTP status, when the backend produced one.
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Port for sending one request to the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Send `request` and return the decoded JSON body.
    ///
    /// An empty body is returned as [`Value::Null`].
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApiRequest::get(["auth", "me"]), "/auth/me")]
    #[case(ApiRequest::get(Vec::<String>::new()), "")]
    #[case(ApiRequest::delete(["users", "7", "follow"]), "/users/7/follow")]
    fn path_joins_segments(#[case] request: ApiRequest, #[case] expected: &str) {
        assert_eq!(request.path(), expected);
    }

    #[test]
    fn builders_attach_body_and_query() {
        let request = ApiRequest::post(["messages"])
            .with_body(serde_json::json!({ "text": "hi" }))
            .with_query(vec![("a".to_owned(), "b".to_owned())]);
        assert_eq!(request.body, Some(serde_json::json!({ "text": "hi" })));
        assert_eq!(request.query.len(), 1);
    }

    #[rstest]
    #[case(TransportError::status(404_u16, "Post not found"), Some(404))]
    #[case(TransportError::timeout("10s"), None)]
    fn status_is_exposed_only_for_status_errors(
        #[case] err: TransportError,
        #[case] expected: Option<u16>,
    ) {
        assert_eq!(err.http_status(), expected);
    }

    #[test]
    fn status_error_message_names_the_code() {
        let err = TransportError::status(401_u16, "Invalid token");
        assert_eq!(err.to_string(), "backend returned status 401: Invalid token");
    }
}
