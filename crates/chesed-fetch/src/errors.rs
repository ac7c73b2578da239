//! Mapping refresh failures onto the HTTP error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chesed_core::ChesedError;
use serde_json::json;

/// Any refresh failure; always reported as a 500 with `{"error": message}`.
#[derive(Debug)]
pub struct FetchError(pub ChesedError);

impl From<ChesedError> for FetchError {
    fn from(err: ChesedError) -> Self {
        FetchError(err)
    }
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Refreshing ideas failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}
