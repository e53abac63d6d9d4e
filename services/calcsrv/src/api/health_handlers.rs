//! Health Check API Handler

use axum::{extract::State, response::Json};
use serde_json::json;
use std::sync::Arc;

use crate::state::AppState;

/// Health check endpoint
///
/// @route GET /health
/// @side-effects None (read-only operation)
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health status")
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "calcsrv",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": state.started_at.elapsed().as_secs(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
