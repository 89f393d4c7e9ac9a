//! Core library for the clinic site: form submission flow, pages and route handlers.

pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod pages;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use forms::{
    FailurePolicy, FailureReport, FormKind, FormSession, HttpWebhookTransport, SubmissionController,
    SubmissionOutcome, SubmissionRegistry, SubmissionStatus, WebhookTransport,
};
pub use handlers::routes::create_routes;
pub use middleware::cors::cors_layer_from_config;

use axum::Router;
use chrono::{DateTime, Utc};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

use config::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub site: SiteConfig,
    pub contact: SubmissionController,
    pub reservation: SubmissionController,
    pub registry: SubmissionRegistry,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Builds both controllers around one shared transport.
    pub fn new(config: &AppConfig, transport: Arc<dyn WebhookTransport>) -> Self {
        Self {
            app_name: "Aura Smile Studio".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            site: config.site.clone(),
            contact: SubmissionController::new(
                FormKind::Contact,
                transport.clone(),
                config.forms.contact.clone(),
            ),
            reservation: SubmissionController::new(
                FormKind::Reservation,
                transport,
                config.forms.reservation.clone(),
            ),
            registry: SubmissionRegistry::new(config.registry.capacity),
            started_at: Utc::now(),
        }
    }

    /// State with an HTTP transport pointed at the configured webhook.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let transport = HttpWebhookTransport::new(&config.webhook.url, config.webhook.timeout())?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub fn controller(&self, kind: FormKind) -> &SubmissionController {
        match kind {
            FormKind::Contact => &self.contact,
            FormKind::Reservation => &self.reservation,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(cors_layer_from_config(&config.cors))
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
