//! Transport double replaying queued responses.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ports::{ApiRequest, ApiTransport, TransportError};

/// Replays scripted results in order and records every request it sees.
///
/// Once the script runs out, calls fail with
/// [`TransportError::InvalidRequest`].
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    /// Empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body.
    pub fn push_ok(&self, body: Value) {
        self.lock_responses().push_back(Ok(body));
    }

    /// Queue a failure.
    pub fn push_err(&self, error: TransportError) {
        self.lock_responses().push_back(Err(error));
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(_) => panic!("requests mutex"),
        }
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<Value, TransportError>>> {
        match self.responses.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("responses mutex"),
        }
    }
}

#[async_trait]
impl ApiTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let path = request.path();
        match self.requests.lock() {
            Ok(mut requests) => requests.push(request),
            Err(_) => panic!("requests mutex"),
        }
        self.lock_responses().pop_front().unwrap_or_else(|| {
            Err(TransportError::invalid_request(format!(
                "no scripted response for {path}"
            )))
        })
    }
}
