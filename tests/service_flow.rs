//! End-to-end service flow against a mock chat-completions endpoint.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockito::Matcher;
use serde_json::json;

use homechat::{
    ChatClientBuilder, CompletionDefaults, CompletionDispatch, CompletionRequest, Endpoint,
    ServiceCall,
};

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn send_request_returns_enriched_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-3.5-turbo-instruct",
            "messages": [
                {"role": "system", "content": "Your answers are short but precise."},
                {"role": "user", "content": "Hello, how are you?"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Bonjour. Comment vas-tu?"))
        .create_async()
        .await;

    let client = ChatClientBuilder::new()
        .endpoint(Endpoint::custom(server.url()))
        .build()
        .unwrap();

    let response = client
        .send_request(ServiceCall::new("Hello, how are you?"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.response, "Bonjour. Comment vas-tu?");
    assert_eq!(response.language, "fr");
    assert!((0.0..=1.0).contains(&response.confidence));
    assert_eq!(response.sentences.len(), 2);
    for sentence in &response.sentences {
        assert_eq!(sentence.language, "fr");
        assert!((0.0..=1.0).contains(&sentence.confidence));
    }
}

#[tokio::test]
async fn call_overrides_reach_the_wire() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "messages": [
                {"role": "system", "content": "Answer in one word."},
                {"role": "user", "content": "Is the door locked?"}
            ],
            "temperature": 0.2,
            "max_tokens": 50
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Yes."))
        .create_async()
        .await;

    let client = ChatClientBuilder::new()
        .endpoint(Endpoint::custom(server.url()))
        .build()
        .unwrap();

    let call: ServiceCall = serde_json::from_value(json!({
        "message": "Is the door locked?",
        "mood": "Answer in one word.",
        "temperature": 0.2,
        "max_tokens": 50
    }))
    .unwrap();
    let response = client.send_request(call).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.response, "Yes.");
}

#[tokio::test]
async fn remote_failure_aborts_the_call() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(json!({"error": {"message": "Rate limit reached"}}).to_string())
        .create_async()
        .await;

    let client = ChatClientBuilder::new()
        .endpoint(Endpoint::custom(server.url()))
        .build()
        .unwrap();

    let err = client
        .send_request(ServiceCall::new("Hello"))
        .await
        .unwrap_err();
    match err {
        homechat::Error::Remote { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Rate limit reached");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

/// Test double that records every request and answers with fixed text.
struct RecordingDispatch {
    seen: Mutex<Vec<CompletionRequest>>,
    reply: &'static str,
}

#[async_trait]
impl CompletionDispatch for RecordingDispatch {
    async fn complete(&self, request: &CompletionRequest) -> homechat::Result<String> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(self.reply.to_string())
    }
}

#[tokio::test]
async fn injected_dispatch_sees_the_merged_request() {
    let dispatch = Arc::new(RecordingDispatch {
        seen: Mutex::new(Vec::new()),
        reply: "The lights are on.",
    });

    let client = ChatClientBuilder::new()
        .endpoint(Endpoint::cloud("sk-test"))
        .model("gpt-4o-mini")
        .mood("Your answers are short but precise.")
        .dispatch(dispatch.clone())
        .build()
        .unwrap();

    let response = client
        .chat("Are the lights on?")
        .max_tokens(64)
        .execute()
        .await
        .unwrap();

    assert_eq!(response.response, "The lights are on.");
    assert_eq!(response.language, "en");

    let seen = dispatch.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].model, "gpt-4o-mini");
    assert_eq!(
        seen[0].messages[0].content,
        "Your answers are short but precise."
    );
    assert_eq!(seen[0].messages[1].content, "Are the lights on?");
    assert_eq!(seen[0].params.max_tokens, 64);
    // Not overridden: stored default.
    assert_eq!(seen[0].params.temperature, 0.7);
}

#[tokio::test]
async fn updated_defaults_apply_to_later_calls() {
    let dispatch = Arc::new(RecordingDispatch {
        seen: Mutex::new(Vec::new()),
        reply: "Done.",
    });

    let client = ChatClientBuilder::new()
        .endpoint(Endpoint::cloud("sk-test"))
        .dispatch(dispatch.clone())
        .build()
        .unwrap();

    let updated = client
        .with_defaults(CompletionDefaults {
            mood: "Reply in German.".into(),
            max_tokens: 120,
            ..Default::default()
        })
        .unwrap();

    updated
        .send_request(ServiceCall::new("Wie spät ist es?"))
        .await
        .unwrap();

    let seen = dispatch.seen.lock().unwrap();
    assert_eq!(seen[0].messages[0].content, "Reply in German.");
    assert_eq!(seen[0].params.max_tokens, 120);
    // The original client keeps its own stored options.
    assert_eq!(client.config().defaults.max_tokens, 300);
}

#[tokio::test]
async fn handler_adapter_round_trips_json() {
    let dispatch = Arc::new(RecordingDispatch {
        seen: Mutex::new(Vec::new()),
        reply: "Hello. Nice to meet you.",
    });
    let client = ChatClientBuilder::new()
        .endpoint(Endpoint::cloud("sk-test"))
        .dispatch(dispatch)
        .build()
        .unwrap();

    let value = homechat::handle_send_request(&client, json!({"message": "Hi"}))
        .await
        .unwrap();

    assert_eq!(value["response"], "Hello. Nice to meet you.");
    assert_eq!(value["language"], "en");
    assert_eq!(value["sentences"].as_array().unwrap().len(), 2);

    let err = homechat::handle_send_request(&client, json!({"bogus": true})).await;
    assert!(err.is_err());
}
