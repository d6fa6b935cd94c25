//! Integration tests for the HTTP API.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use reasonedge::{
    ChatCompletionRequest, ChatCompletionResponse, Choice, FinishReason, Message, Provider,
    ProviderInfo, ReasonError, Usage,
};
use reasonedge_server::{build_reasoner, router, AppState, ServiceConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

#[derive(Debug, Default)]
struct MockProvider {
    reply: Option<String>,
    delay: Duration,
    calls: AtomicUsize,
    last_request: Mutex<Option<ChatCompletionRequest>>,
}

impl MockProvider {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.to_string()),
            ..Default::default()
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn info(&self) -> Arc<ProviderInfo> {
        Arc::new(ProviderInfo {
            id: "mock".to_string(),
            name: "Mock".to_string(),
        })
    }

    async fn chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ReasonError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(req.clone());
        tokio::time::sleep(self.delay).await;

        let text = self
            .reply
            .clone()
            .ok_or_else(|| ReasonError::provider("connection refused by upstream 10.0.0.7"))?;

        Ok(ChatCompletionResponse {
            id: "resp-1".to_string(),
            model: req.model,
            choices: vec![Choice {
                index: 0,
                message: Message::assistant(text),
                finish_reason: FinishReason::Stop,
            }],
            usage: Usage::default(),
            created: None,
        })
    }
}

fn test_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.model_name = "gpt-4o".to_string();
    config.provider.api_key = Some("sk-test".to_string());
    config.provider.request_timeout_secs = 5;
    config
}

fn app(provider: Arc<MockProvider>) -> axum::Router {
    router(AppState::new(build_reasoner(provider, &test_config())))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: axum::Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = ServiceExt::<Request<Body>>::oneshot(app, req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), 100_000)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

// --- GET / and /algorithms ---

#[tokio::test]
async fn test_root_reports_healthy() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, json) = send(app(MockProvider::replying("")), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["message"], "Welcome to ReasonEdge API");
}

#[tokio::test]
async fn test_algorithms_lists_registry() {
    let req = Request::builder()
        .uri("/algorithms")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(app(MockProvider::replying("")), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([{"name": "chain_of_thought", "display_name": "Chain of Thought"}])
    );
}

// --- POST /reason ---

#[tokio::test]
async fn test_reason_returns_structured_result() {
    let provider = MockProvider::replying(
        "Step 1: France is in Europe.\nStep 2: Its capital is Paris.\nAnswer: Paris",
    );
    let (status, json) = send(
        app(provider.clone()),
        post_json(
            "/reason",
            r#"{"prompt": "What is the capital of France?", "temperature": 0.5, "algorithm": "chain_of_thought"}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["reasoning_steps"],
        serde_json::json!([
            "Step 1: France is in Europe.",
            "Step 2: Its capital is Paris.",
            "Answer: Paris"
        ])
    );
    assert_eq!(json["final_answer"], "Answer: Paris");
    assert_eq!(json["metadata"]["model_name"], "gpt-4o");
    assert_eq!(json["metadata"]["temperature"], 0.5);
    assert!(json["execution_time"].as_f64().unwrap() >= 0.0);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_reason_applies_defaults_and_history() {
    let provider = MockProvider::replying("Berlin is the capital.");
    let (status, json) = send(
        app(provider.clone()),
        post_json(
            "/reason",
            r#"{
                "prompt": "And Germany?",
                "messages": [
                    {"role": "user", "content": "Capital of France?"},
                    {"role": "assistant", "content": "Answer: Paris"}
                ]
            }"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["reasoning_steps"], serde_json::json!(["Berlin is the capital."]));
    assert_eq!(json["final_answer"], "Berlin is the capital.");
    assert_eq!(json["metadata"]["temperature"], 0.7);

    let sent = provider.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(sent.messages.len(), 4);
    assert_eq!(sent.messages[3].text(), "And Germany?");
}

#[tokio::test]
async fn test_empty_model_output() {
    let (status, json) = send(
        app(MockProvider::replying("")),
        post_json("/reason", r#"{"prompt": "?"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["reasoning_steps"], serde_json::json!([]));
    assert_eq!(json["final_answer"], "");
}

#[tokio::test]
async fn test_unknown_algorithm_is_bad_request() {
    let provider = MockProvider::replying("Answer: x");
    let (status, json) = send(
        app(provider.clone()),
        post_json(
            "/reason",
            r#"{"prompt": "q", "algorithm": "tree_of_thought"}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["detail"],
        "Invalid request parameters: Unsupported algorithm: tree_of_thought"
    );
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_out_of_range_temperature_is_bad_request() {
    let provider = MockProvider::replying("Answer: x");
    let (status, json) = send(
        app(provider.clone()),
        post_json("/reason", r#"{"prompt": "q", "temperature": 1.7}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["detail"].as_str().unwrap().contains("1.7"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_temperature_just_outside_range_is_bad_request() {
    let provider = MockProvider::replying("Answer: x");

    for body in [
        r#"{"prompt": "q", "temperature": 1.00000001}"#,
        r#"{"prompt": "q", "temperature": -1e-50}"#,
    ] {
        let (status, json) = send(app(provider.clone()), post_json("/reason", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {body}");
        assert!(json["detail"]
            .as_str()
            .unwrap()
            .contains("temperature must be between 0.0 and 1.0"));
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let provider = MockProvider::replying("Answer: x");
    let (status, json) = send(
        app(provider.clone()),
        post_json("/reason", r#"{"temperature": 0.5}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["detail"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request parameters:"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_backend_failure_is_opaque_server_error() {
    let (status, json) = send(
        app(MockProvider::failing()),
        post_json("/reason", r#"{"prompt": "q"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["detail"], "Internal server error occurred");
}

#[tokio::test(start_paused = true)]
async fn test_backend_timeout_is_server_error() {
    let provider = Arc::new(MockProvider {
        reply: Some("Answer: late".to_string()),
        delay: Duration::from_secs(60),
        ..Default::default()
    });
    let (status, json) = send(app(provider), post_json("/reason", r#"{"prompt": "q"}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["detail"], "Internal server error occurred");
}
