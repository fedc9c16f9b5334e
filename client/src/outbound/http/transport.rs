//! Reqwest-backed transport for the ReaVise REST backend.
//!
//! This adapter owns transport details only: URL joining, bearer tokens,
//! timeout and HTTP error mapping, and JSON decoding of response bodies.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::ports::{
    AUTH_TOKEN_KEY, ApiRequest, ApiTransport, HttpMethod, KeyValueStore, TransportError,
};

/// Backend root used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Transport sending JSON requests to one API base URL.
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    store: Arc<dyn KeyValueStore>,
}

impl ReqwestTransport {
    /// Build a transport with an explicit request timeout.
    ///
    /// The bearer token is read from `store` on every request, so a token
    /// written after construction is picked up.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        timeout: Duration,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            store,
        })
    }
}

#[async_trait]
impl ApiTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let url = build_url(&self.base_url, &request)?;
        debug!(method = %request.method, path = %request.path(), "backend request");

        let mut builder = self
            .client
            .request(http_method(request.method), url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = self.store.get(AUTH_TOKEN_KEY) {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        decode_body(body.as_ref())
    }
}

fn http_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn build_url(base: &Url, request: &ApiRequest) -> Result<Url, TransportError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| TransportError::invalid_request(format!("base URL {base} cannot hold a path")))?
        .pop_if_empty()
        .extend(&request.segments);
    if !request.query.is_empty() {
        url.query_pairs_mut().extend_pairs(&request.query);
    }
    Ok(url)
}

fn decode_body(body: &[u8]) -> Result<Value, TransportError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|error| {
        TransportError::decode(format!("invalid backend JSON payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::timeout(error.to_string())
    } else {
        TransportError::transport(error.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn map_status_error(status: StatusCode, body: &[u8]) -> TransportError {
    let message = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => {
            let preview = body_preview(body);
            if preview.is_empty() {
                status.canonical_reason().unwrap_or("no reason").to_owned()
            } else {
                preview
            }
        }
    };
    TransportError::status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
