//! Integration tests for the OpenAI-compatible engines using WireMock
//!
//! These tests mock the provider HTTP API to verify client behavior without
//! requiring real credentials or network access.

use ai_core::{
    ChatEngine, ChatRequest, EmbeddingConfig, EmbeddingEngine, InferenceConfig, InferenceError,
    OpenAiChatEngine, OpenAiEmbeddingEngine,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

// =============================================================================
// Test Helpers
// =============================================================================

fn chat_config_for_mock(base_url: &str) -> InferenceConfig {
    InferenceConfig {
        base_url: base_url.to_string(),
        model: "test-model".to_string(),
        timeout_ms: 5000,
        ..InferenceConfig::default()
    }
    .with_api_key("sk-test-key")
}

fn embedding_config_for_mock(base_url: &str) -> EmbeddingConfig {
    EmbeddingConfig {
        base_url: base_url.to_string(),
        model: "test-embed".to_string(),
        timeout_ms: 5000,
        dimensions: 4,
        ..EmbeddingConfig::default()
    }
    .with_api_key("sk-test-key")
}

/// Sample chat completion success response
fn chat_success_response() -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": "{\"category\":\"benign\",\"needs_review\":false,\"explanation\":\"Harmless greeting.\"}"
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 42,
            "completion_tokens": 21,
            "total_tokens": 63
        }
    })
}

/// Sample embeddings success response
fn embed_success_response() -> serde_json::Value {
    serde_json::json!({
        "object": "list",
        "model": "test-embed",
        "data": [
            {"object": "embedding", "index": 0, "embedding": [0.1, 0.2, 0.3, 0.4]}
        ]
    })
}

// =============================================================================
// Chat Engine Tests
// =============================================================================

#[tokio::test]
async fn chat_completion_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response()))
        .mount(&server)
        .await;

    let engine = OpenAiChatEngine::new(chat_config_for_mock(&server.uri())).unwrap();
    let response = engine
        .complete(ChatRequest::simple("Hello friend"))
        .await
        .unwrap();

    assert!(response.content.contains("benign"));
    assert_eq!(response.model, "test-model");
    assert_eq!(response.usage.unwrap().total_tokens, 63);
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));
}

#[tokio::test]
async fn chat_completion_sends_json_response_format() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "response_format": {"type": "json_object"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response()))
        .expect(1)
        .mount(&server)
        .await;

    let engine = OpenAiChatEngine::new(chat_config_for_mock(&server.uri())).unwrap();
    let result = engine
        .complete(ChatRequest::simple("Hello").json_object())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn chat_completion_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
        .mount(&server)
        .await;

    let engine = OpenAiChatEngine::new(chat_config_for_mock(&server.uri())).unwrap();
    let result = engine.complete(ChatRequest::simple("Hello")).await;

    match result {
        Err(InferenceError::ServerError(msg)) => assert!(msg.contains("500")),
        other => unreachable!("Expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn chat_completion_provider_rate_limit() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let engine = OpenAiChatEngine::new(chat_config_for_mock(&server.uri())).unwrap();
    let err = engine
        .complete(ChatRequest::simple("Hello"))
        .await
        .unwrap_err();

    assert!(matches!(&err, InferenceError::RateLimited));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn chat_completion_empty_choices_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "model": "test-model",
            "choices": []
        })))
        .mount(&server)
        .await;

    let engine = OpenAiChatEngine::new(chat_config_for_mock(&server.uri())).unwrap();
    let result = engine.complete(ChatRequest::simple("Hello")).await;

    assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
}

#[tokio::test]
async fn chat_completion_malformed_body_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let engine = OpenAiChatEngine::new(chat_config_for_mock(&server.uri())).unwrap();
    let result = engine.complete(ChatRequest::simple("Hello")).await;

    assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
}

#[tokio::test]
async fn chat_health_check_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&server)
        .await;

    let engine = OpenAiChatEngine::new(chat_config_for_mock(&server.uri())).unwrap();
    assert!(engine.is_healthy().await);
}

#[tokio::test]
async fn chat_health_check_unhealthy_on_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let engine = OpenAiChatEngine::new(chat_config_for_mock(&server.uri())).unwrap();
    assert!(!engine.is_healthy().await);
}

// =============================================================================
// Embedding Engine Tests
// =============================================================================

#[tokio::test]
async fn embed_single_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .and(header("authorization", "Bearer sk-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(embed_success_response()))
        .mount(&server)
        .await;

    let engine = OpenAiEmbeddingEngine::new(embedding_config_for_mock(&server.uri())).unwrap();
    let embedding = engine.embed("Category: harassment\nContent: test").await.unwrap();

    assert_eq!(embedding, vec![0.1, 0.2, 0.3, 0.4]);
}

#[tokio::test]
async fn embed_batch_preserves_input_order() {
    let server = MockServer::start().await;

    // Return data out of order; the client must sort by index.
    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {"index": 1, "embedding": [1.0, 1.0]},
                {"index": 0, "embedding": [0.0, 0.0]}
            ]
        })))
        .mount(&server)
        .await;

    let engine = OpenAiEmbeddingEngine::new(embedding_config_for_mock(&server.uri())).unwrap();
    let embeddings = engine
        .embed_batch(&["first".to_string(), "second".to_string()])
        .await
        .unwrap();

    assert_eq!(embeddings[0], vec![0.0, 0.0]);
    assert_eq!(embeddings[1], vec![1.0, 1.0]);
}

#[tokio::test]
async fn embed_batch_empty_input_skips_request() {
    let server = MockServer::start().await;
    // No mock mounted: a request would fail the test with a connect error.

    let engine = OpenAiEmbeddingEngine::new(embedding_config_for_mock(&server.uri())).unwrap();
    let embeddings = engine.embed_batch(&[]).await.unwrap();

    assert!(embeddings.is_empty());
}

#[tokio::test]
async fn embed_empty_data_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&server)
        .await;

    let engine = OpenAiEmbeddingEngine::new(embedding_config_for_mock(&server.uri())).unwrap();
    let result = engine.embed("some text").await;

    assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
}

#[tokio::test]
async fn embed_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let engine = OpenAiEmbeddingEngine::new(embedding_config_for_mock(&server.uri())).unwrap();
    let result = engine.embed("some text").await;

    assert!(matches!(result, Err(InferenceError::ServerError(_))));
}
