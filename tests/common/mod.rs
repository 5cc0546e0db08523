//! Shared fixtures for the mock-server integration tests.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use layer_platform_api::LayerClient;
use mockito::ServerGuard;
use serde_json::{json, Value};
use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Install a test subscriber once per binary; `RUST_LOG` controls verbosity.
fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub const TOKEN: &str = "Fv9nCCEoBWX7w9lHCnU9bFCIWkcBGLXWDBtsw5Rzft76LCrM";
pub const APP_ID: &str = "24f43c32-4d95-11e4-b3a2-0fd00000020d";
pub const CONVERSATION_ID: &str = "c12fd916-1390-464b-850f-1380a051f7c8";

/// A created-conversation payload in the platform's response shape.
pub fn conversation_fixture() -> Value {
    json!({
        "id": format!("layer:///conversations/{CONVERSATION_ID}"),
        "url": format!("https://api.layer.com/apps/{APP_ID}/conversations/{CONVERSATION_ID}"),
        "participants": ["user1", "user2"],
        "distinct": false,
        "metadata": {"background_color": "#3c3c3c"},
    })
}

/// The 422 error body the platform returns for a create without
/// participants.
pub fn missing_participants_fixture() -> Value {
    json!({
        "code": 104,
        "id": "missing_property",
        "message": "The participants property is missing",
        "url": "https://developer.layer.com/api.md#creating-a-conversation",
    })
}

/// Client wired to the given mock server.
pub fn test_client(server: &ServerGuard) -> LayerClient {
    init_tracing();
    LayerClient::builder()
        .token(TOKEN)
        .app_id(APP_ID)
        .base_url(server.url())
        .build()
        .expect("valid test configuration")
}
