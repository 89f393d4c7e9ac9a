//! Health and liveness probes

use crate::{models::ApiResponse, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::info;

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /health");

    let uptime = (chrono::Utc::now() - state.started_at).num_seconds().max(0);

    Json(ApiResponse::success(serde_json::json!({
        "status": "healthy",
        "app": state.app_name,
        "version": state.version,
        "timestamp": chrono::Utc::now().timestamp(),
        "uptime_seconds": uptime,
        "tracked_submissions": state.registry.len(),
    })))
}

pub async fn handle_liveness() -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::success(serde_json::json!({
        "status": "alive",
        "timestamp": chrono::Utc::now().timestamp()
    }))))
}
