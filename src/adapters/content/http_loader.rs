//! HTTP composition loader - reads collections from the content API.
//!
//! Each collection is served as a JSON array of composition documents at
//! `{base_url}/collections/{slug}`. Both collections are fetched concurrently.
//!
//! # Failure handling
//!
//! Transport errors (including a body cut off mid-read), timeouts, 408, 429
//! and 5xx responses are retried with exponential backoff. Unbuildable
//! requests, other 4xx responses and malformed bodies fail at once. 404 means the collection has no documents yet.
//!
//! When retries run out the loader either fails the whole load or, with
//! `fail_open`, serves that collection as empty and logs a warning.

use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::document::{CompositionDocument, IdAllocator};
use super::retry::RetryPolicy;
use crate::domain::composition::Composition;
use crate::domain::foundation::CollectionType;
use crate::ports::{CompositionLoader, LoadError};

/// Configuration for the HTTP loader.
#[derive(Debug, Clone)]
pub struct HttpLoaderConfig {
    /// Base URL of the content API (no trailing slash needed).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    pub retry: RetryPolicy,
    /// Serve an empty collection instead of failing once retries are exhausted.
    pub fail_open: bool,
}

impl HttpLoaderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
            fail_open: true,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_fail_open(mut self, fail_open: bool) -> Self {
        self.fail_open = fail_open;
        self
    }
}

pub struct HttpCompositionLoader {
    config: HttpLoaderConfig,
    client: Client,
}

/// Result of a single request.
enum Attempt {
    Documents(Vec<CompositionDocument>),
    Retryable(String),
}

impl HttpCompositionLoader {
    /// Creates the loader and its HTTP client.
    pub fn new(config: HttpLoaderConfig) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LoadError::request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn collection_url(&self, collection: CollectionType) -> String {
        format!(
            "{}/collections/{}",
            self.config.base_url.trim_end_matches('/'),
            collection.slug()
        )
    }

    async fn attempt(&self, url: &str) -> Result<Attempt, LoadError> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Ok(Attempt::Retryable(format!("timed out: {}", e))),
            Err(e) if e.is_connect() => {
                return Ok(Attempt::Retryable(format!("connection failed: {}", e)))
            }
            Err(e) if e.is_builder() => {
                return Err(LoadError::request(format!("invalid request: {}", e)))
            }
            Err(e) => return Ok(Attempt::Retryable(e.to_string())),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(url, "Collection not published yet");
            return Ok(Attempt::Documents(vec![]));
        }
        if status == StatusCode::REQUEST_TIMEOUT
            || status == StatusCode::TOO_MANY_REQUESTS
            || status.is_server_error()
        {
            return Ok(Attempt::Retryable(format!("status {}", status)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LoadError::request(format!("status {}: {}", status, body)));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Ok(Attempt::Retryable(format!("failed to read body: {}", e))),
        };
        CompositionDocument::parse_many(&body, url).map(Attempt::Documents)
    }

    /// Fetches one collection, retrying transient failures.
    async fn fetch_documents(
        &self,
        collection: CollectionType,
    ) -> Result<Vec<CompositionDocument>, LoadError> {
        let url = self.collection_url(collection);
        let policy = &self.config.retry;
        let mut attempt = 0;

        loop {
            match self.attempt(&url).await? {
                Attempt::Documents(documents) => return Ok(documents),
                Attempt::Retryable(reason) if attempt < policy.max_retries => {
                    let delay = policy.delay_for_attempt(attempt);
                    warn!(
                        %collection,
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        %reason,
                        "Content fetch failed, retrying"
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Attempt::Retryable(reason) => {
                    return Err(LoadError::Unavailable {
                        collection,
                        attempts: attempt + 1,
                        reason,
                    })
                }
            }
        }
    }

    /// Fetches one collection, applying the fail-open policy.
    async fn load_collection(
        &self,
        collection: CollectionType,
    ) -> Result<Vec<CompositionDocument>, LoadError> {
        match self.fetch_documents(collection).await {
            Err(e @ LoadError::Unavailable { .. }) if self.config.fail_open => {
                warn!(%collection, error = %e, "Serving collection as empty");
                Ok(vec![])
            }
            other => other,
        }
    }
}

#[async_trait]
impl CompositionLoader for HttpCompositionLoader {
    async fn fetch_collections(&self) -> Result<Vec<Composition>, LoadError> {
        let buckets = try_join_all(
            CollectionType::ALL
                .into_iter()
                .map(|collection| async move {
                    self.load_collection(collection)
                        .await
                        .map(|documents| (collection, documents))
                }),
        )
        .await?;

        let mut ids = IdAllocator::default();
        let mut compositions = Vec::new();

        for (collection, documents) in buckets {
            let source_name = self.collection_url(collection);
            for document in documents {
                let Some(target) = document.resolve_collection(Some(collection), &source_name)
                else {
                    continue;
                };
                let id = ids.next(target);
                compositions.push(document.into_composition(target, id, &source_name)?);
            }
        }

        Ok(compositions)
    }

    fn source_name(&self) -> &str {
        "http"
    }
}
