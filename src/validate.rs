//! Pre-flight input validation.
//!
//! Every public operation runs these checks before a request is built, so a
//! malformed call never reaches the transport. All checks are pure and
//! synchronous.

use crate::error::messages;
use crate::types::Operation;
use crate::{Error, Result};
use uuid::Uuid;

/// Check that a resource id is a syntactically valid UUID.
pub fn identifier(id: &str) -> Result<()> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| Error::validation(messages::ID_FORMAT, "id"))
}

/// Check that a caller-supplied request body is a JSON object. Bare scalars
/// and arrays are rejected; the platform only accepts object payloads.
pub fn object_body(body: &serde_json::Value) -> Result<()> {
    if body.is_object() {
        Ok(())
    } else {
        Err(Error::validation(messages::BODY_SHAPE, "body"))
    }
}

/// Check that an edit call carries at least one well-formed operation.
/// The descriptor types make most malformed shapes unrepresentable; what
/// remains to check at runtime is emptiness and blank property names.
pub fn operations(operations: &[Operation]) -> Result<()> {
    if operations.is_empty() || operations.iter().any(|op| op.property.trim().is_empty()) {
        return Err(Error::validation(messages::OPERATIONS_SHAPE, "operations"));
    }
    Ok(())
}
