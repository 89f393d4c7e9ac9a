//! CORS (Cross-Origin Resource Sharing) middleware configuration

use crate::config::CorsConfig;
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer as TowerCorsLayer;

/// CORS for the JSON submission API, restricted to the configured origins.
pub fn cors_layer_from_config(config: &CorsConfig) -> TowerCorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    TowerCorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
        ])
        .max_age(std::time::Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::post,
        Router,
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_preflight_for_allowed_origin() {
        let config = CorsConfig {
            allowed_origins: vec!["https://aurasmilestudio.com".to_string()],
        };
        let app = Router::new()
            .route("/api/forms/contact", post(|| async { "ok" }))
            .layer(cors_layer_from_config(&config));

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/forms/contact")
            .header("Origin", "https://aurasmilestudio.com")
            .header("Access-Control-Request-Method", "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "https://aurasmilestudio.com"
        );
    }

    #[tokio::test]
    async fn test_unknown_origin_gets_no_allow_header() {
        let app = Router::new()
            .route("/api/forms/contact", post(|| async { "ok" }))
            .layer(cors_layer_from_config(&CorsConfig::default()));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/forms/contact")
            .header("Origin", "https://evil.example")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response.headers().get("access-control-allow-origin").is_none());
    }
}
