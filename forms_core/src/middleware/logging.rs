//! Request tracing for pages, the form API and probes

use axum::body::Body;
use http::{Request, Response};
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::{
    DefaultOnBodyChunk, DefaultOnEos, MakeSpan, OnFailure, OnRequest, OnResponse, TraceLayer,
};
use tracing::{info_span, Span};
use uuid::Uuid;

/// Which part of the site a request path belongs to.
pub fn surface(path: &str) -> &'static str {
    match path {
        "/health" | "/live" => "probe",
        p if p.starts_with("/api/") => "api",
        _ => "page",
    }
}

pub fn logging_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    impl OnRequest<Body> + Clone,
    impl OnResponse<Body> + Clone,
    DefaultOnBodyChunk,
    DefaultOnEos,
    impl OnFailure<ServerErrorsFailureClass> + Clone,
> {
    TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            let path = request.uri().path();
            info_span!(
                "request",
                id = %Uuid::new_v4(),
                surface = surface(path),
                method = %request.method(),
                path = %path,
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::debug!(lang = ?request.uri().query(), "request received");
        })
        .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
            let status = response.status();
            let code = status.as_u16();
            let latency_ms = latency.as_millis();

            if status.is_client_error() {
                tracing::warn!(status = code, latency_ms, "request rejected");
            } else if status.is_server_error() {
                tracing::error!(status = code, latency_ms, "request errored");
            } else {
                tracing::info!(status = code, latency_ms, "response sent");
            }
        })
        .on_failure(
            |class: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                tracing::error!(latency_ms = latency.as_millis(), %class, "request failed");
            },
        )
}
