//! Route handlers.

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use coach_core::{AnalysisError, AnalysisRequest, ErrorKind};
use serde_json::{json, Value};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::app::AppState;
use crate::response::{ApiError, ModelsBody};

/// `POST /api/analyze`: body `{ "prompt": string, "model"?: string }`.
///
/// The body is parsed leniently so that a missing or mistyped `prompt` reports
/// "Missing prompt" instead of a framework rejection.
pub(crate) async fn analyze_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!("analyze", %request_id);

    let request = match serde_json::from_slice::<Value>(&body) {
        Ok(value) if value.is_object() => AnalysisRequest::from_json(&value),
        _ => {
            warn!(parent: &span, bytes = body.len(), "rejecting malformed request body");
            return ApiError(AnalysisError::new(
                ErrorKind::InvalidInput,
                "Invalid request body",
            ))
            .into_response();
        }
    };

    async move {
        match state.service.analyze(&request).await {
            Ok(feedback) => {
                info!("analysis complete");
                Json(feedback).into_response()
            }
            Err(err) => {
                info!(status = err.status_code(), error = %err, "analysis failed");
                ApiError::from(err).into_response()
            }
        }
    }
    .instrument(span)
    .await
}

/// `GET /api/models`: `{ "models": [...], "default": id }`.
pub(crate) async fn models_handler(State(state): State<AppState>) -> Response {
    let registry = state.service.registry();
    Json(ModelsBody {
        models: registry.list_models(),
        default: registry.default_model_id(),
    })
    .into_response()
}

/// `GET /api/health`
pub(crate) async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
