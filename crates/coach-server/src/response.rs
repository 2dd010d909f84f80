//! JSON response bodies and the error-to-status mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use coach_core::{AnalysisError, ModelConfig};
use serde::Serialize;

/// `{ "error": "..." }`
#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ModelsBody<'a> {
    pub(crate) models: &'a [ModelConfig],
    pub(crate) default: &'a str,
}

/// An analysis failure rendered with its classified status.
pub(crate) struct ApiError(pub(crate) AnalysisError);

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(ErrorBody {
                error: self.0.message,
            }),
        )
            .into_response()
    }
}
