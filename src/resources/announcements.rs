//! Announcement operations.

use crate::client::LayerClient;
use crate::response::ApiResponse;
use crate::{validate, Result};
use serde_json::json;

/// Facade over `/apps/{app_id}/announcements`.
pub struct Announcements<'a> {
    client: &'a LayerClient,
}

impl<'a> Announcements<'a> {
    pub(crate) fn new(client: &'a LayerClient) -> Self {
        Self { client }
    }

    /// Send an announcement to a set of recipients. `body` must be a JSON
    /// object carrying `recipients`, `sender` and `parts`.
    pub async fn send(&self, body: &serde_json::Value) -> Result<ApiResponse> {
        validate::object_body(body)?;
        let request = self.client.requests().send_announcement(body.clone());
        self.client.execute(request).await
    }

    /// Send a plain-text announcement on behalf of a user. Assembles the
    /// documented payload and delegates to [`send`](Announcements::send).
    pub async fn send_text_from_user(
        &self,
        recipients: &[&str],
        sender_id: &str,
        text: &str,
    ) -> Result<ApiResponse> {
        let body = json!({
            "recipients": recipients,
            "sender": {"user_id": sender_id},
            "parts": [{"body": text, "mime_type": "text/plain"}],
        });
        self.send(&body).await
    }
}
