//! Tests for the Anthropic client against a local mock of the Messages API.

use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
use loresmith_core::{GenerateRequest, Message};
use loresmith_interface::LoresmithDriver;
use loresmith_models::AnthropicClient;
use serde_json::{Value, json};

/// Spawn a mock messages endpoint and return its URL.
async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Mock server failed");
    });
    format!("http://{addr}/v1/messages")
}

fn test_request() -> GenerateRequest {
    GenerateRequest::builder()
        .system(Some("You are a chronicler.".to_string()))
        .messages(vec![Message::user("Write a backstory for token 7")])
        .build()
        .expect("Failed to build request")
}

#[tokio::test]
async fn test_generate_sends_headers_and_parses_text() {
    let router = Router::new().route(
        "/v1/messages",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            assert_eq!(headers["x-api-key"], "test-key");
            assert_eq!(headers["anthropic-version"], "2023-06-01");
            assert_eq!(body["system"], "You are a chronicler.");
            assert_eq!(body["model"], "claude-test");
            Json(json!({
                "id": "msg_test",
                "model": "claude-test",
                "content": [{"type": "text", "text": "  Born under a red moon.  "}],
                "stop_reason": "end_turn",
                "usage": {"input_tokens": 12, "output_tokens": 6}
            }))
        }),
    );
    let url = spawn_mock(router).await;

    let client = AnthropicClient::new("test-key", "claude-test").with_api_url(url);
    let response = client.generate(&test_request()).await.unwrap();

    assert_eq!(response.text(), "Born under a red moon.");
}

#[tokio::test]
async fn test_generate_surfaces_api_errors() {
    let router = Router::new().route(
        "/v1/messages",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({"type": "error", "error": {"type": "rate_limit_error"}})),
            )
        }),
    );
    let url = spawn_mock(router).await;

    let client = AnthropicClient::new("test-key", "claude-test").with_api_url(url);
    let err = client.generate(&test_request()).await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("429"), "unexpected error: {message}");
    assert!(message.contains("rate_limit_error"));
}

#[tokio::test]
async fn test_generate_reports_malformed_body() {
    let router = Router::new().route("/v1/messages", post(|| async { "not json" }));
    let url = spawn_mock(router).await;

    let client = AnthropicClient::new("test-key", "claude-test").with_api_url(url);
    let err = client.generate(&test_request()).await.unwrap_err();

    assert!(err.to_string().contains("Failed to parse response"));
}

#[cfg(feature = "api")]
#[tokio::test]
async fn test_live_anthropic_completion() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let client = AnthropicClient::from_env("claude-3-5-haiku-20241022")?.with_max_tokens(64);
    let request = GenerateRequest::builder()
        .messages(vec![Message::user("Reply with the single word: lore")])
        .build()?;
    let response = client.generate(&request).await?;
    assert!(!response.text().is_empty());
    Ok(())
}
