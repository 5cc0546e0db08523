//! Message operations.

use crate::client::LayerClient;
use crate::response::ApiResponse;
use crate::{validate, Result};
use serde_json::json;

/// Facade over `/apps/{app_id}/conversations/{id}/messages`.
pub struct Messages<'a> {
    client: &'a LayerClient,
}

impl<'a> Messages<'a> {
    pub(crate) fn new(client: &'a LayerClient) -> Self {
        Self { client }
    }

    /// Send a message into a conversation. `body` must be a JSON object in
    /// the platform's message format (`sender` plus `parts`).
    pub async fn send(
        &self,
        conversation_id: &str,
        body: &serde_json::Value,
    ) -> Result<ApiResponse> {
        validate::identifier(conversation_id)?;
        validate::object_body(body)?;
        let request = self
            .client
            .requests()
            .send_message(conversation_id, body.clone());
        self.client.execute(request).await
    }

    /// Send a plain-text message on behalf of a user. Convenience wrapper
    /// that assembles the documented single-part payload and delegates to
    /// [`send`](Messages::send).
    pub async fn send_text_from_user(
        &self,
        conversation_id: &str,
        sender_id: &str,
        text: &str,
    ) -> Result<ApiResponse> {
        let body = json!({
            "sender": {"user_id": sender_id},
            "parts": [{"body": text, "mime_type": "text/plain"}],
        });
        self.send(conversation_id, &body).await
    }
}
