//! Route table

use crate::{models::ApiResponse, AppState};
use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use super::{forms, health};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(forms::handle_index))
        .route(
            "/contact",
            get(forms::handle_contact_page).post(forms::handle_contact_submit),
        )
        .route(
            "/reservation",
            get(forms::handle_reservation_page).post(forms::handle_reservation_submit),
        )
        .route("/api/forms/:kind", post(forms::handle_api_submit))
        .route(
            "/api/forms/:kind/submissions/:id",
            get(forms::handle_api_submission_status),
        )
        .route("/health", get(health::handle_health))
        .route("/live", get(health::handle_liveness))
        .fallback(handle_not_found)
}

async fn handle_not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(format!("No route for {}", uri.path()))),
    )
}
