//! The Chesed Machine fetch function
//!
//! Pulls the idea columns from the source spreadsheet and overwrites the
//! stored `idea_components` row. Exposed as a single HTTP endpoint with
//! permissive CORS so the widget (or a scheduler) can trigger it.

pub mod config;
pub mod errors;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use chesed_core::{refresh_idea_components, SharedStore, SheetsClient};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use errors::FetchError;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub sheets: Arc<SheetsClient>,
    pub store: SharedStore,
}

/// Create the router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/fetch-ideas", any(fetch_ideas))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Refresh the stored word lists.
///
/// `OPTIONS` only answers with the CORS headers.
async fn fetch_ideas(method: Method, State(state): State<AppState>) -> Result<Response, FetchError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    refresh_idea_components(&state.sheets, state.store.as_ref()).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Ideas updated successfully" })),
    )
        .into_response())
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
