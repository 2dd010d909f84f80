use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use super::common::{self, StubProvider, VALID_REPLY};

async fn post_analyze(base: &str, body: Value) -> (StatusCode, Value) {
    let response = Client::new()
        .post(format!("{}/api/analyze", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn e2e_default_model() {
    let provider = StubProvider::replying(VALID_REPLY);
    let base = common::spawn_server(common::service_with_key(provider.clone())).await;

    let (status, body) = post_analyze(&base, json!({"prompt": "test prompt"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"pros": ["Good point"], "cons": ["Bad point"], "improvedPrompt": "Improved version"})
    );
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn e2e_specified_model() {
    let provider = StubProvider::replying(VALID_REPLY);
    let base = common::spawn_server(common::service_with_key(provider)).await;

    let (status, _) = post_analyze(
        &base,
        json!({"prompt": "test prompt", "model": "gemini-1.5-pro"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn e2e_invalid_model() {
    let provider = StubProvider::replying(VALID_REPLY);
    let base = common::spawn_server(common::service_with_key(provider.clone())).await;

    let (status, body) = post_analyze(
        &base,
        json!({"prompt": "test prompt", "model": "invalid-model"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("model"), "{}", error);
    assert!(error.contains("invalid-model"), "{}", error);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn e2e_missing_prompt() {
    let provider = StubProvider::replying(VALID_REPLY);
    let base = common::spawn_server(common::service_with_key(provider.clone())).await;

    for body in [json!({}), json!({"prompt": ""}), json!({"prompt": 12})] {
        let (status, response) = post_analyze(&base, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({"error": "Missing prompt"}));
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn e2e_missing_api_key() {
    let provider = StubProvider::replying(VALID_REPLY);
    let base = common::spawn_server(common::service_without_key(provider.clone())).await;

    let (status, body) = post_analyze(&base, json!({"prompt": "test prompt"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Missing Gemini API key"}));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn e2e_unparseable_reply() {
    let provider = StubProvider::replying("not json at all");
    let base = common::spawn_server(common::service_with_key(provider)).await;

    let (status, body) = post_analyze(&base, json!({"prompt": "test prompt"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Error analyzing prompt"}));
}

#[tokio::test]
async fn e2e_provider_failure_hides_cause() {
    let provider = StubProvider::failing();
    let base = common::spawn_server(common::service_with_key(provider)).await;

    let (status, body) = post_analyze(&base, json!({"prompt": "test prompt"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Error analyzing prompt"}));
}

#[tokio::test]
async fn e2e_malformed_body() {
    let provider = StubProvider::replying(VALID_REPLY);
    let base = common::spawn_server(common::service_with_key(provider.clone())).await;

    for raw in ["not valid json", "[\"prompt\"]"] {
        let response = Client::new()
            .post(format!("{}/api/analyze", base))
            .header("content-type", "application/json")
            .body(raw)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Invalid request body"}));
    }
    assert_eq!(provider.calls(), 0);
}
