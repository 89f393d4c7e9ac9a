//! Form pages and the JSON submission API

use crate::{
    error::{AppError, Result},
    forms::{validate_input, FormKind, FormSession, StatusPresenter, SubmissionStatus},
    i18n::{Catalog, Language},
    models::ApiResponse,
    pages::{self, FormView},
    AppState,
};
use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use maud::Markup;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

fn catalog(state: &AppState, query: &LangQuery) -> Catalog {
    Catalog::new(Language::from_query(
        query.lang.as_deref(),
        state.site.default_language,
    ))
}

fn render(state: &AppState, session: &FormSession, catalog: &Catalog) -> Markup {
    let kind = session.kind();
    let snapshot = session.snapshot();
    let values = session.payload();

    // Reloading drops whatever the visitor typed, so only a cleared form refreshes.
    let refresh_after = if snapshot.status == SubmissionStatus::Success && values.is_blank() {
        state.controller(kind).policy().success_display_seconds
    } else {
        None
    };

    let view = FormView {
        kind,
        values,
        banner: StatusPresenter::banner(kind, snapshot.status, snapshot.debug_info.as_ref(), catalog),
        submit: StatusPresenter::submit_control(kind, snapshot.status, catalog),
        refresh_after,
    };

    pages::form_page(&view, &state.site, catalog)
}

/// Copies posted values into a fresh session, ignoring names the form does not declare.
fn session_from_fields(kind: FormKind, fields: &HashMap<String, String>) -> FormSession {
    let session = FormSession::new(kind);
    for (name, value) in fields {
        if session.set(name, value.as_str()).is_err() {
            debug!(form = %kind, field = %name, "Ignoring undeclared form field");
        }
    }
    session
}

pub async fn handle_index(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> impl IntoResponse {
    pages::index_page(&catalog(&state, &query))
}

pub async fn handle_contact_page(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> impl IntoResponse {
    render(&state, &FormSession::new(FormKind::Contact), &catalog(&state, &query))
}

pub async fn handle_reservation_page(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> impl IntoResponse {
    render(&state, &FormSession::new(FormKind::Reservation), &catalog(&state, &query))
}

pub async fn handle_contact_submit(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<impl IntoResponse> {
    submit_page(state, query, FormKind::Contact, fields).await
}

pub async fn handle_reservation_submit(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<impl IntoResponse> {
    submit_page(state, query, FormKind::Reservation, fields).await
}

async fn submit_page(
    state: AppState,
    query: LangQuery,
    kind: FormKind,
    fields: HashMap<String, String>,
) -> Result<Markup> {
    info!("POST {} - {} fields", kind.page_path(), fields.len());

    let session = session_from_fields(kind, &fields);
    let outcome = state.controller(kind).submit(&session).await?;
    debug!(form = %kind, status = %outcome.status, "Form page submission settled");

    Ok(render(&state, &session, &catalog(&state, &query)))
}

pub async fn handle_api_submit(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(fields): Json<HashMap<String, String>>,
) -> Result<impl IntoResponse> {
    let kind: FormKind = kind.parse()?;
    info!("POST /api/forms/{} - {} fields", kind, fields.len());

    validate_input(kind, fields.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .map_err(AppError::InvalidFields)?;

    let session = session_from_fields(kind, &fields);
    state.registry.insert(session.clone());

    let outcome = state.controller(kind).submit(&session).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(outcome))))
}

pub async fn handle_api_submission_status(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse> {
    let kind: FormKind = kind.parse()?;
    info!("GET /api/forms/{}/submissions/{}", kind, id);

    let session = state
        .registry
        .get(&id)
        .filter(|s| s.kind() == kind)
        .ok_or_else(|| AppError::NotFound(format!("Submission {} not found", id)))?;

    Ok(Json(ApiResponse::success(session.snapshot())))
}
