//! HTTP execution.
//!
//! The [`Transport`] trait is the seam between request construction and the
//! network: it takes a [`RequestDescriptor`] and returns the raw status and
//! body, or a transport-level failure. [`HttpTransport`] is the
//! reqwest-backed implementation; tests substitute their own.

use crate::config::ClientConfig;
use crate::request::{Method, RequestDescriptor};
use crate::Result;
use async_trait::async_trait;
use std::env;
use std::time::Duration;

/// Raw outcome of one HTTP exchange, before status classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

/// Executes request descriptors. One attempt per call; retries, timeouts
/// beyond the client default, and cancellation belong to implementations,
/// not to the layers above.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RequestDescriptor) -> Result<RawResponse>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Other(String),
}

/// reqwest-backed transport bound to one base URL and bearer credential.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        // Minimal production-friendly default, env-overridable.
        let timeout_secs = env::var("LAYER_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            token: config.token().to_string(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RequestDescriptor) -> Result<RawResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        tracing::debug!(method = request.method.as_str(), %url, "dispatching request");

        let mut req = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Patch => self.client.patch(&url),
        };

        req = req
            .bearer_auth(&self.token)
            .header("accept", "application/json");
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        // Empty bodies (204, bare error statuses) stay None. Non-JSON error
        // pages are kept verbatim rather than dropped.
        let body = if text.is_empty() {
            None
        } else {
            Some(
                serde_json::from_str(&text)
                    .unwrap_or_else(|_| serde_json::Value::String(text)),
            )
        };

        tracing::debug!(status, "response received");
        Ok(RawResponse { status, body })
    }
}
