//! Content source configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::content::{HttpLoaderConfig, RetryPolicy};

/// Where compositions are loaded from
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// One document per file under `content_dir`
    #[default]
    Files,
    /// Remote content API at `api_base_url`
    Http,
}

/// Content loading configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub source: ContentSource,

    /// Root directory for the file source
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Base URL for the HTTP source
    pub api_base_url: Option<String>,

    /// Retries after the first failed fetch
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the first retry; doubles each attempt
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Per-request timeout for the HTTP source
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Serve an empty collection instead of failing once retries are exhausted
    #[serde(default = "default_fail_open")]
    pub fail_open: bool,
}

impl ContentConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            initial_backoff: Duration::from_millis(self.initial_backoff_ms),
            ..RetryPolicy::default()
        }
    }

    /// Loader settings for the HTTP source, if one is configured.
    pub fn http_loader_config(&self) -> Option<HttpLoaderConfig> {
        self.api_base_url.as_ref().map(|url| {
            HttpLoaderConfig::new(url.clone())
                .with_timeout(Duration::from_secs(self.request_timeout_secs))
                .with_retry(self.retry_policy())
                .with_fail_open(self.fail_open)
        })
    }

    /// Validate content configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.source == ContentSource::Http {
            let url = match self.api_base_url.as_deref() {
                Some(url) if !url.trim().is_empty() => url,
                _ => return Err(ValidationError::MissingRequired("CONTENT__API_BASE_URL")),
            };
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidApiUrl);
            }
            if *environment == Environment::Production && !url.starts_with("https://") {
                return Err(ValidationError::ApiUrlMustBeHttps);
            }
        }
        if self.max_retries > 10 {
            return Err(ValidationError::TooManyRetries);
        }
        if self.initial_backoff_ms == 0 || self.initial_backoff_ms > 60_000 {
            return Err(ValidationError::InvalidBackoff);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: ContentSource::default(),
            content_dir: default_content_dir(),
            api_base_url: None,
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
            request_timeout_secs: default_request_timeout(),
            fail_open: default_fail_open(),
        }
    }
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff_ms() -> u64 {
    500
}

fn default_request_timeout() -> u64 {
    10
}

fn default_fail_open() -> bool {
    true
}
