//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `COMPOSITION_SITE_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use composition_site::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Serving content from {:?}", config.content.source);
//! ```

mod analytics;
mod content;
mod error;
mod server;

pub use analytics::AnalyticsConfig;
pub use content::{ContentConfig, ContentSource};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development setup reading from `./content`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Content source configuration (files or remote API)
    #[serde(default)]
    pub content: ContentConfig,

    /// Page-view analytics configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COMPOSITION_SITE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `COMPOSITION_SITE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `COMPOSITION_SITE__CONTENT__SOURCE=http` -> `content.source = http`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COMPOSITION_SITE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.content.validate(&self.server.environment)?;
        self.analytics.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "COMPOSITION_SITE__SERVER__PORT",
        "COMPOSITION_SITE__SERVER__ENVIRONMENT",
        "COMPOSITION_SITE__CONTENT__SOURCE",
        "COMPOSITION_SITE__CONTENT__API_BASE_URL",
        "COMPOSITION_SITE__CONTENT__CONTENT_DIR",
        "COMPOSITION_SITE__CONTENT__FAIL_OPEN",
        "COMPOSITION_SITE__ANALYTICS__DATABASE_URL",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.content.source, ContentSource::Files);
        assert!(config.analytics.database_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_http_source() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("COMPOSITION_SITE__CONTENT__SOURCE", "http");
        env::set_var(
            "COMPOSITION_SITE__CONTENT__API_BASE_URL",
            "https://content.example.com/api",
        );
        env::set_var("COMPOSITION_SITE__CONTENT__FAIL_OPEN", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.content.source, ContentSource::Http);
        assert!(!config.content.fail_open);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_content_dir_and_database_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("COMPOSITION_SITE__CONTENT__CONTENT_DIR", "/srv/site/content");
        env::set_var(
            "COMPOSITION_SITE__ANALYTICS__DATABASE_URL",
            "postgresql://site@localhost/site",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.content.content_dir, PathBuf::from("/srv/site/content"));
        assert_eq!(
            config
                .analytics
                .database_url
                .as_ref()
                .map(|url| url.expose_secret().as_str()),
            Some("postgresql://site@localhost/site")
        );
    }

    #[test]
    fn test_http_source_without_url_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("COMPOSITION_SITE__CONTENT__SOURCE", "http");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("COMPOSITION_SITE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("COMPOSITION_SITE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
