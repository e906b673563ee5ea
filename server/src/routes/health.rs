//! Health check endpoint.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use trivia_engine::RecordStore;

use crate::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Number of categories, when the store answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<usize>,
}

/// Create health routes.
pub fn routes<S: RecordStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        .route("/health", get(health_check::<S>))
        .route("/", get(root))
}

/// Health check handler. Reports 503 when the record store is unreachable.
async fn health_check<S: RecordStore>(
    State(state): State<AppState<S>>,
) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");
    match state.bank.store().categories().await {
        Ok(categories) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                categories: Some(categories.len()),
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    version,
                    categories: None,
                }),
            )
        }
    }
}

/// Root handler.
async fn root() -> &'static str {
    "Trivia Question Bank"
}
