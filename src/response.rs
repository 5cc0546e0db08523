//! Response normalization.
//!
//! Classifies a raw transport outcome into exactly one channel: a success
//! carrying the HTTP status and body, or [`Error::Remote`] carrying the
//! status and whatever structured error payload the service returned.

use crate::transport::RawResponse;
use crate::{Error, Result};

/// A successful API response. `body` is `None` for empty-bodied statuses
/// such as the 204 an edit returns.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

/// Map a raw response into the success or error channel by status class.
/// Transport failures never reach this point; they surface upstream as
/// `Error::Transport` without status classification.
pub fn normalize(raw: RawResponse) -> Result<ApiResponse> {
    if (200..300).contains(&raw.status) {
        return Ok(ApiResponse {
            status: raw.status,
            body: raw.body,
        });
    }

    let message = remote_message(raw.status, raw.body.as_ref());
    tracing::warn!(status = raw.status, %message, "request failed");
    Err(Error::Remote {
        status: raw.status,
        message,
        body: raw.body,
    })
}

/// Prefer the service's own `message` field; fall back to the status line.
fn remote_message(status: u16, body: Option<&serde_json::Value>) -> String {
    body.and_then(|b| b.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {status}"))
}
