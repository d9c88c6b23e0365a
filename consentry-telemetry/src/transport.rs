//! The HTTP seam.

use crate::error::{TelemetryError, TelemetryResult};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

/// One-shot JSON POST transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Posts a JSON body and returns the response body, `Null` when the
    /// backend answers without one.
    async fn post(&self, url: &str, body: &Value) -> TelemetryResult<Value>;
}

/// Transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, body: &Value) -> TelemetryResult<Value> {
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TelemetryError::Status(status.as_u16()));
        }
        Ok(response.json().await.unwrap_or(Value::Null))
    }
}

/// Test transport that records every request and answers from a queue.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<(String, Value)>>,
    responses: Mutex<Vec<TelemetryResult<Value>>>,
}

impl RecordingTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the response for the next request (FIFO).
    pub fn push_response(&self, response: TelemetryResult<Value>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push(response);
        }
    }

    /// Every `(url, body)` pair posted so far.
    #[must_use]
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(&self, url: &str, body: &Value) -> TelemetryResult<Value> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((url.to_string(), body.clone()));
        }
        match self.responses.lock() {
            Ok(mut responses) if !responses.is_empty() => responses.remove(0),
            _ => Ok(Value::Null),
        }
    }
}

/// Transport that drops everything, for embeddings with telemetry off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTransport;

#[async_trait]
impl Transport for NullTransport {
    async fn post(&self, _url: &str, _body: &Value) -> TelemetryResult<Value> {
        Ok(Value::Null)
    }
}
