//! Tests for the execution engine

use super::{ResponseHandler, SdkManager, VALIDATION_FAILED};
use crate::endpoints::{PaymentSource, Transaction, Webhook};
use crate::types::{Action, ClientConfig};
use crate::SdkError;
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;

fn webhook_body() -> serde_json::Value {
    json!({
        "created_at": "2019-07-31T06:08:07Z",
        "headers": {"sdkkey1": "sdkval1"},
        "id": "6NC2WWP",
        "url": "http://sdktest.local",
        "updated_at": "2019-07-31T06:08:07Z"
    })
}

fn sdk(server: &Server) -> SdkManager {
    SdkManager::new(ClientConfig::new(server.url())).unwrap()
}

#[tokio::test]
async fn test_sdk_manager_creation() {
    let sdk = SdkManager::new(ClientConfig::new("https://api.eoneopay.test/")).unwrap();
    assert_eq!(sdk.base_uri(), "https://api.eoneopay.test");

    let result = SdkManager::new(ClientConfig::new("api.eoneopay.test"));
    assert!(matches!(result, Err(SdkError::Config(_))));
}

#[tokio::test]
async fn test_execute_create_sends_auth_and_payload() {
    let mut server = Server::new_async().await;
    // "api-key:" in base64
    let mock = server
        .mock("POST", "/webhooks")
        .match_header("authorization", "Basic YXBpLWtleTo=")
        .match_header("accept", "application/json")
        .match_body(Matcher::Json(json!({
            "headers": {"sdkkey1": "sdkval1"},
            "url": "http://sdktest.local"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(webhook_body().to_string())
        .create();

    let webhook = Webhook::new("http://sdktest.local")
        .with_header("sdkkey1", "sdkval1")
        .with_id("ignored-on-create");

    let created = sdk(&server)
        .execute(&webhook, Action::Create, "api-key")
        .await
        .unwrap()
        .unwrap();

    mock.assert();
    assert_eq!(created.id.as_deref(), Some("6NC2WWP"));
    assert_eq!(created.url.as_deref(), Some("http://sdktest.local"));
}

#[tokio::test]
async fn test_execute_validation_failure_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", "/webhooks").expect(0).create();

    let result = sdk(&server)
        .execute(&Webhook::default(), Action::Create, "api-key")
        .await;

    mock.assert();
    match result {
        Err(SdkError::Validation {
            message,
            violations,
        }) => {
            assert_eq!(message, VALIDATION_FAILED);
            assert!(violations.contains("url"));
        }
        other => panic!("Expected validation error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_execute_unsupported_action() {
    let server = Server::new_async().await;
    let webhook = Webhook::new("http://sdktest.local").with_id("6NC2WWP");

    let result = sdk(&server).execute(&webhook, Action::Get, "api-key").await;
    assert!(matches!(result, Err(SdkError::Config(_))));
}

#[tokio::test]
async fn test_execute_rejects_dot_segment_ids() {
    let mut server = Server::new_async().await;
    let mock = server.mock("DELETE", Matcher::Any).expect(0).create();

    for id in ["..", "."] {
        let webhook = Webhook::default().with_id(id);
        let result = sdk(&server).execute(&webhook, Action::Delete, "api-key").await;
        match result {
            Err(SdkError::Config(message)) => assert!(message.contains("dot path segment")),
            other => panic!("Expected config error, got: {:?}", other),
        }
    }

    mock.assert();
}

#[tokio::test]
async fn test_execute_list() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/webhooks")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([webhook_body(), webhook_body()]).to_string())
        .create();

    let webhooks = sdk(&server)
        .execute_list(&Webhook::default(), "api-key")
        .await
        .unwrap();

    assert_eq!(webhooks.len(), 2);
    assert_eq!(webhooks[0].headers.as_ref().map(|h| h.len()), Some(1));
}

#[tokio::test]
async fn test_execute_get_payment_source() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/tokens/RPW2NYUJCGHFJ72WTDZ1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"token": "RPW2NYUJCGHFJ72WTDZ1", "type": "credit_card"}).to_string())
        .create();

    let source = sdk(&server)
        .execute(&PaymentSource::with_token("RPW2NYUJCGHFJ72WTDZ1"), Action::Get, "api-key")
        .await
        .unwrap()
        .unwrap();

    mock.assert();
    assert!(source.is_credit_card());
}

#[tokio::test]
async fn test_execute_non_success_is_invalid_api_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/transactions/TX-1")
        .with_status(404)
        .with_body(r#"{"code":1100,"sub_code":1,"message":"Not found"}"#)
        .create();

    let transaction = Transaction {
        id: Some("TX-1".to_string()),
        ..Transaction::default()
    };
    let result = sdk(&server)
        .execute(&transaction, Action::Get, "api-key")
        .await;

    match result {
        Err(SdkError::InvalidApiResponse { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("Not found"));
        }
        other => panic!("Expected invalid API response, got: {:?}", other),
    }
}

#[test]
fn test_response_handler_empty_bodies() {
    let output: Option<Webhook> = ResponseHandler::handle(StatusCode::NO_CONTENT, "").unwrap();
    assert!(output.is_none());

    let output: Option<Webhook> = ResponseHandler::handle(StatusCode::OK, "  ").unwrap();
    assert!(output.is_none());

    let result: crate::Result<Option<Webhook>> = ResponseHandler::handle(StatusCode::OK, "{not json");
    assert!(matches!(result, Err(SdkError::Serialization(_))));
}
