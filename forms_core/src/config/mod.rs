//! Application configuration

pub mod settings;

pub use settings::{
    AppConfig, CorsConfig, FormsConfig, RegistryConfig, ServerConfig, SiteConfig, WebhookConfig,
};
