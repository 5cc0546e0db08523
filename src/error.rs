use crate::transport::TransportError;
use thiserror::Error;

/// Fixed messages for construction and validation failures.
///
/// Callers matching on failure modes can compare against these rather than
/// parsing free-form text.
pub mod messages {
    /// Client construction without a credential.
    pub const TOKEN_REQUIRED: &str = "token is required";
    /// Client construction with a missing or malformed app id.
    pub const APP_ID_INVALID: &str = "appId must be a valid app identifier";
    /// Client construction with a fully-qualified app id (URI form).
    pub const APP_ID_NOT_BARE: &str = "appId must be a bare identifier, not a fully-qualified URI";
    /// Client construction with an unparseable base URL override.
    pub const BASE_URL_INVALID: &str = "base URL must be a valid absolute URL";
    /// A resource id that does not parse as a UUID.
    pub const ID_FORMAT: &str = "id must be a valid UUID";
    /// A request body that is not a JSON object.
    pub const BODY_SHAPE: &str = "body must be a JSON object";
    /// An edit call with an empty or malformed operation list.
    pub const OPERATIONS_SHAPE: &str = "operations must be a non-empty list of patch operations";
}

/// Unified error type for the Layer API client.
///
/// Local failures (`Configuration`, `Validation`) are raised before any
/// network activity; `Remote` carries whatever the service returned for a
/// non-success status; `Transport` means no usable response was received.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid client configuration, detected once at construction.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Caller input rejected before a request was built.
    #[error("validation error: {message}{}", format_field(.field))]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The service answered with a non-success HTTP status.
    #[error("remote error: HTTP {status}: {message}")]
    Remote {
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Request or response body could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_field(field: &Option<String>) -> String {
    match field {
        Some(f) => format!(" (field: {f})"),
        None => String::new(),
    }
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// HTTP status of a remote failure, if this error came from the service.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured error body returned by the service, if any.
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Error::Remote { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}
