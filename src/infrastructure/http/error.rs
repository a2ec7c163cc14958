//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::services::TurnError;

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `TurnError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub TurnError);

impl From<TurnError> for ApiError {
    fn from(err: TurnError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            TurnError::UnknownScenario(_) => (StatusCode::NOT_FOUND, "unknown_scenario"),
            TurnError::UnknownAction(_) => (StatusCode::BAD_REQUEST, "unknown_action"),
            TurnError::MissingDecision => (StatusCode::BAD_REQUEST, "missing_decision"),
            TurnError::MissingState | TurnError::MalformedState(_) => {
                (StatusCode::BAD_REQUEST, "malformed_state")
            }
            TurnError::Terminal(_) => (StatusCode::CONFLICT, "playthrough_ended"),
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
