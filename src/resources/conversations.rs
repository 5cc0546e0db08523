//! Conversation operations.

use crate::client::LayerClient;
use crate::response::ApiResponse;
use crate::types::Operation;
use crate::{validate, Result};

/// Facade over `/apps/{app_id}/conversations`.
pub struct Conversations<'a> {
    client: &'a LayerClient,
}

impl<'a> Conversations<'a> {
    pub(crate) fn new(client: &'a LayerClient) -> Self {
        Self { client }
    }

    /// Create a conversation. `body` must be a JSON object, typically
    /// carrying `participants` and optional `metadata`. Resolves with the
    /// 201 response and the created conversation.
    pub async fn create(&self, body: &serde_json::Value) -> Result<ApiResponse> {
        validate::object_body(body)?;
        let request = self.client.requests().create_conversation(body.clone());
        self.client.execute(request).await
    }

    /// Fetch a conversation by id.
    pub async fn get(&self, id: &str) -> Result<ApiResponse> {
        validate::identifier(id)?;
        let request = self.client.requests().get_conversation(id);
        self.client.execute(request).await
    }

    /// Patch a conversation's mutable properties with an ordered list of
    /// operations. Resolves with the 204 the platform returns on success.
    pub async fn edit(&self, id: &str, operations: &[Operation]) -> Result<ApiResponse> {
        validate::identifier(id)?;
        validate::operations(operations)?;
        let request = self.client.requests().edit_conversation(id, operations)?;
        self.client.execute(request).await
    }
}
