//! Message operations against a mock server.

mod common;

use common::{test_client, APP_ID, CONVERSATION_ID};
use layer_platform_api::error::messages;
use layer_platform_api::Error;
use serde_json::json;

fn message_fixture() -> serde_json::Value {
    json!({
        "id": "layer:///messages/940de862-3c96-11e4-baad-164230d1df67",
        "conversation": {"id": format!("layer:///conversations/{CONVERSATION_ID}")},
        "parts": [{"body": "Hello!", "mime_type": "text/plain"}],
        "sender": {"user_id": "user1"},
    })
}

#[tokio::test]
async fn send_returns_created_message() {
    let mut server = mockito::Server::new_async().await;
    let fixture = message_fixture();
    let mock = server
        .mock(
            "POST",
            format!("/apps/{APP_ID}/conversations/{CONVERSATION_ID}/messages").as_str(),
        )
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(fixture.to_string())
        .create_async()
        .await;

    let client = test_client(&server);
    let res = client
        .messages()
        .send(
            CONVERSATION_ID,
            &json!({
                "sender": {"user_id": "user1"},
                "parts": [{"body": "Hello!", "mime_type": "text/plain"}],
            }),
        )
        .await
        .unwrap();

    assert_eq!(res.status, 201);
    assert_eq!(res.body.unwrap(), fixture);
    mock.assert_async().await;
}

#[tokio::test]
async fn send_text_from_user_builds_single_part_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            format!("/apps/{APP_ID}/conversations/{CONVERSATION_ID}/messages").as_str(),
        )
        .match_body(mockito::Matcher::Json(json!({
            "sender": {"user_id": "user1"},
            "parts": [{"body": "Hello!", "mime_type": "text/plain"}],
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(message_fixture().to_string())
        .create_async()
        .await;

    let client = test_client(&server);
    let res = client
        .messages()
        .send_text_from_user(CONVERSATION_ID, "user1", "Hello!")
        .await
        .unwrap();

    assert_eq!(res.status, 201);
    mock.assert_async().await;
}

#[tokio::test]
async fn send_rejects_malformed_conversation_id_before_sending() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client
        .messages()
        .send("not-a-uuid", &json!({"parts": []}))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    assert!(err.to_string().contains(messages::ID_FORMAT));
    mock.assert_async().await;
}

#[tokio::test]
async fn send_rejects_non_object_body_before_sending() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client
        .messages()
        .send(CONVERSATION_ID, &json!("just text"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains(messages::BODY_SHAPE));
    mock.assert_async().await;
}
