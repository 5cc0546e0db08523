//! Payload types for patch operations.

use serde::{Deserialize, Serialize};

/// What an [`Operation`] does to the targeted property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Remove,
    Set,
}

/// Value carried by a patch operation: a single member or a full replacement
/// list, matching the wire format the platform documents for PATCH bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchValue {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for PatchValue {
    fn from(value: &str) -> Self {
        PatchValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for PatchValue {
    fn from(value: Vec<String>) -> Self {
        PatchValue::Many(value)
    }
}

/// One add/remove/set instruction against a conversation's mutable
/// properties. Sent in order as the body of an edit request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operation")]
    pub op: PatchOp,
    pub property: String,
    pub value: PatchValue,
}

impl Operation {
    pub fn add(property: impl Into<String>, value: impl Into<PatchValue>) -> Self {
        Self {
            op: PatchOp::Add,
            property: property.into(),
            value: value.into(),
        }
    }

    pub fn remove(property: impl Into<String>, value: impl Into<PatchValue>) -> Self {
        Self {
            op: PatchOp::Remove,
            property: property.into(),
            value: value.into(),
        }
    }

    pub fn set(property: impl Into<String>, value: impl Into<PatchValue>) -> Self {
        Self {
            op: PatchOp::Set,
            property: property.into(),
            value: value.into(),
        }
    }
}
