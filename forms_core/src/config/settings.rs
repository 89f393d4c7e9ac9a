use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::forms::policy::FailurePolicy;
use crate::i18n::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub webhook: WebhookConfig,
    pub forms: FormsConfig,
    pub registry: RegistryConfig,
    pub cors: CorsConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsConfig {
    pub contact: FailurePolicy,
    pub reservation: FailurePolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub default_language: Language,
    pub phone: String,
    pub email: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            webhook: WebhookConfig::default(),
            forms: FormsConfig::default(),
            registry: RegistryConfig::default(),
            cors: CorsConfig::default(),
            site: SiteConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:5678/webhook/site-forms".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl WebhookConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            contact: FailurePolicy::contact(),
            reservation: FailurePolicy::reservation(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { capacity: 1024 }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            phone: "+90 555 123 4567".to_string(),
            email: "info@aurasmilestudio.com".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Defaults, then the TOML file at `path` if it exists, then `APP_*` variables.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.webhook.url.trim().is_empty() {
            return Err(ConfigError::Message(
                "Webhook URL cannot be empty".to_string(),
            ));
        }

        if let Err(e) = reqwest::Url::parse(&self.webhook.url) {
            return Err(ConfigError::Message(format!(
                "Webhook URL is invalid: {}",
                e
            )));
        }

        if self.webhook.timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Webhook timeout must be greater than 0".to_string(),
            ));
        }

        if self.registry.capacity == 0 {
            return Err(ConfigError::Message(
                "Registry capacity must be greater than 0".to_string(),
            ));
        }

        for (name, policy) in [("contact", &self.forms.contact), ("reservation", &self.forms.reservation)] {
            if policy.success_display_seconds == Some(0) {
                return Err(ConfigError::Message(format!(
                    "forms.{}.success_display_seconds must be greater than 0 when set",
                    name
                )));
            }
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
