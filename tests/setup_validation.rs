//! Setup-time validation: connectivity and credential failures map to the
//! distinct reason codes the config flow displays.

use mockito::Matcher;
use serde_json::json;

use homechat::{validate_endpoint, ChatClientBuilder, Endpoint};

#[tokio::test]
async fn unreachable_endpoint_reports_cannot_connect() {
    // Nothing listens on port 1.
    let client = ChatClientBuilder::new()
        .endpoint(Endpoint::custom("http://127.0.0.1:1"))
        .build()
        .unwrap();

    let err = validate_endpoint(&client).await.unwrap_err();
    assert_eq!(err.reason_code(), "cannot_connect");
}

#[tokio::test]
async fn rejected_credentials_report_invalid_auth() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(json!({"error": {"message": "Incorrect API key provided"}}).to_string())
        .create_async()
        .await;

    let client = ChatClientBuilder::new()
        .endpoint(Endpoint::custom(server.url()))
        .build()
        .unwrap();

    let err = validate_endpoint(&client).await.unwrap_err();
    assert_eq!(err.reason_code(), "invalid_auth");
}

#[tokio::test]
async fn other_remote_failures_collapse_into_invalid_auth() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = ChatClientBuilder::new()
        .endpoint(Endpoint::custom(server.url()))
        .build()
        .unwrap();

    let err = validate_endpoint(&client).await.unwrap_err();
    assert_eq!(err.reason_code(), "invalid_auth");
}

#[tokio::test]
async fn healthy_endpoint_validates() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "messages": [{"role": "system", "content": "Say this is a test."}],
            "max_tokens": 5
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "choices": [{
                    "message": {"role": "assistant", "content": "This is a test."}
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = ChatClientBuilder::new()
        .endpoint(Endpoint::custom(server.url()))
        .build()
        .unwrap();

    assert!(validate_endpoint(&client).await.is_ok());
    mock.assert_async().await;
}
