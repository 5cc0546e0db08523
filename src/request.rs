//! Request descriptors and per-endpoint builders.
//!
//! A [`RequestDescriptor`] is everything the transport needs to issue one
//! call: method, path relative to the base URL, and an optional JSON body.
//! [`RequestBuilder`] knows the platform's path layout
//! (`/apps/{app_id}/{resource}[/{id}]`) and produces descriptors from
//! already-validated parameters.

use crate::types::Operation;
use crate::Result;

/// HTTP methods the platform API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

/// A fully-specified outbound request, one per public operation.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl RequestDescriptor {
    fn get(path: String) -> Self {
        Self {
            method: Method::Get,
            path,
            body: None,
        }
    }

    fn post(path: String, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path,
            body: Some(body),
        }
    }

    fn patch(path: String, body: serde_json::Value) -> Self {
        Self {
            method: Method::Patch,
            path,
            body: Some(body),
        }
    }
}

/// Builds descriptors for every documented endpoint of one app.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    app_id: String,
}

impl RequestBuilder {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
        }
    }

    fn collection(&self, resource: &str) -> String {
        format!("/apps/{}/{}", self.app_id, resource)
    }

    fn item(&self, resource: &str, id: &str) -> String {
        format!("/apps/{}/{}/{}", self.app_id, resource, id)
    }

    pub fn create_conversation(&self, body: serde_json::Value) -> RequestDescriptor {
        RequestDescriptor::post(self.collection("conversations"), body)
    }

    pub fn get_conversation(&self, id: &str) -> RequestDescriptor {
        RequestDescriptor::get(self.item("conversations", id))
    }

    pub fn edit_conversation(&self, id: &str, operations: &[Operation]) -> Result<RequestDescriptor> {
        let body = serde_json::to_value(operations)?;
        Ok(RequestDescriptor::patch(self.item("conversations", id), body))
    }

    pub fn send_message(
        &self,
        conversation_id: &str,
        body: serde_json::Value,
    ) -> RequestDescriptor {
        let path = format!(
            "{}/messages",
            self.item("conversations", conversation_id)
        );
        RequestDescriptor::post(path, body)
    }

    pub fn send_announcement(&self, body: serde_json::Value) -> RequestDescriptor {
        RequestDescriptor::post(self.collection("announcements"), body)
    }
}
