//! Webhook delivery over HTTP

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Webhook request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Webhook unreachable: {0}")]
    Network(String),

    #[error("Invalid webhook URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub status_text: String,
}

impl WebhookResponse {
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers a serialized form to the webhook.
///
/// `Ok` means the endpoint answered, whatever the status code; `Err` means
/// no answer was received.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn post_json(&self, body: String) -> Result<WebhookResponse, TransportError>;

    fn endpoint(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct HttpWebhookTransport {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl HttpWebhookTransport {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Self::with_client(client, url, timeout)
    }

    pub fn with_client(client: Client, url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let url = Url::parse(url).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;
        Ok(Self { client, url, timeout })
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.timeout)
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl WebhookTransport for HttpWebhookTransport {
    async fn post_json(&self, body: String) -> Result<WebhookResponse, TransportError> {
        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        // Only the status line is inspected; the response body is never read.
        let status = response.status();
        debug!(status = status.as_u16(), "Webhook responded");

        Ok(WebhookResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
        ))
    }

    fn endpoint(&self) -> &str {
        self.url.as_str()
    }
}
