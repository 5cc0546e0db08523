//! # layer-platform-api
//!
//! Client bindings for the Layer messaging platform REST API:
//! conversations, messages and announcements.
//!
//! The crate does three things and nothing more: it validates
//! caller-supplied parameters before any network activity, constructs
//! requests against the documented endpoints, and normalizes responses and
//! errors into a uniform result. Each public operation is a single outbound
//! HTTP call; there are no retries, no pagination and no local state beyond
//! the immutable client configuration.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use layer_platform_api::{LayerClient, Operation};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> layer_platform_api::Result<()> {
//!     let client = LayerClient::new("my-token", "24f43c32-4d95-11e4-b3a2-0fd00000020d")?;
//!
//!     let created = client
//!         .conversations()
//!         .create(&json!({"participants": ["user1", "user2"]}))
//!         .await?;
//!     println!("created: {:?}", created.body);
//!
//!     let conversation_id = "c12fd916-1390-464b-850f-1380a051f7c8";
//!     client
//!         .conversations()
//!         .edit(conversation_id, &[Operation::add("participants", "user3")])
//!         .await?;
//!
//!     client
//!         .messages()
//!         .send_text_from_user(conversation_id, "user1", "Hello!")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`LayerClient`] and its builder |
//! | [`config`] | Validated, immutable client configuration |
//! | [`validate`] | Pre-flight input validation |
//! | [`request`] | Request descriptors and endpoint builders |
//! | [`response`] | Status classification and result normalization |
//! | [`transport`] | The [`Transport`] seam and its reqwest implementation |
//! | [`resources`] | Per-resource facades |

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod resources;
pub mod response;
pub mod transport;
pub mod types;
pub mod validate;

pub use client::{LayerClient, LayerClientBuilder};
pub use config::ClientConfig;
pub use error::Error;
pub use response::ApiResponse;
pub use transport::{RawResponse, Transport, TransportError};
pub use types::{Operation, PatchOp, PatchValue};

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, Error>;
