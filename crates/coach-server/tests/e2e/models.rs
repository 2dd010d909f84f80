use reqwest::StatusCode;
use serde_json::{json, Value};

use super::common::{self, StubProvider, VALID_REPLY};

#[tokio::test]
async fn e2e_models_list() {
    let base = common::spawn_server(common::service_without_key(StubProvider::replying(
        VALID_REPLY,
    )))
    .await;

    let response = reqwest::get(format!("{}/api/models", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["default"], json!("gemini-1.5-flash"));
    let ids: Vec<&str> = body["models"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["gemini-1.5-flash", "gemini-1.5-pro"]);
    assert_eq!(body["models"][1]["name"], json!("Gemini 1.5 Pro"));
}

#[tokio::test]
async fn e2e_health() {
    let base = common::spawn_server(common::service_without_key(StubProvider::replying(
        VALID_REPLY,
    )))
    .await;

    let response = reqwest::get(format!("{}/api/health", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}
