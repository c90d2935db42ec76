//! ContentStore - the in-memory catalog shared by every reading query.
//!
//! The store holds one immutable `Catalog` snapshot behind an `Arc`. A refresh
//! builds a complete replacement from the loader and swaps it in with a single
//! write, so readers see either the old catalog or the new one, never a mix.
//! Refreshes are serialized: a call made while another is in flight waits for
//! it instead of racing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info};

use crate::domain::composition::{Catalog, Composition};
use crate::domain::foundation::CollectionType;
use crate::ports::{CompositionLoader, LoadError};

pub struct ContentStore {
    loader: Arc<dyn CompositionLoader>,
    catalog: RwLock<Arc<Catalog>>,
    initialized: AtomicBool,
    refresh_lock: Mutex<()>,
}

impl ContentStore {
    pub fn new(loader: Arc<dyn CompositionLoader>) -> Self {
        Self {
            loader,
            catalog: RwLock::new(Arc::new(Catalog::empty())),
            initialized: AtomicBool::new(false),
            refresh_lock: Mutex::new(()),
        }
    }

    /// True once any refresh has completed successfully.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// The current catalog snapshot.
    pub async fn snapshot(&self) -> Arc<Catalog> {
        self.catalog.read().await.clone()
    }

    /// Compositions of one bucket in the current snapshot.
    pub async fn bucket(&self, collection: CollectionType) -> Vec<Composition> {
        self.snapshot().await.bucket(collection).to_vec()
    }

    /// Reloads everything from the loader and replaces the catalog.
    ///
    /// # Errors
    ///
    /// Returns the loader's `LoadError`; the previous catalog stays in place.
    pub async fn refresh(&self) -> Result<Arc<Catalog>, LoadError> {
        let _guard = self.refresh_lock.lock().await;
        self.refresh_locked().await
    }

    /// Loads the catalog unless it is already initialized and non-empty.
    ///
    /// A loaded catalog is returned without waiting on an in-flight refresh.
    /// On a cold start, callers queued behind the first load observe its
    /// result and skip the loader.
    pub async fn ensure_loaded(&self) -> Result<Arc<Catalog>, LoadError> {
        if let Some(current) = self.loaded_snapshot().await {
            return Ok(current);
        }

        let _guard = self.refresh_lock.lock().await;
        if let Some(current) = self.loaded_snapshot().await {
            debug!("Catalog already loaded, skipping redundant refresh");
            return Ok(current);
        }

        self.refresh_locked().await
    }

    async fn loaded_snapshot(&self) -> Option<Arc<Catalog>> {
        let current = self.snapshot().await;
        (self.is_initialized() && !current.is_empty()).then_some(current)
    }

    async fn refresh_locked(&self) -> Result<Arc<Catalog>, LoadError> {
        let started = Instant::now();
        debug!(source = self.loader.source_name(), "Refreshing compositions");

        let compositions = self.loader.fetch_collections().await.map_err(|e| {
            error!(source = self.loader.source_name(), error = %e, "Failed to refresh compositions");
            e
        })?;

        let catalog = Arc::new(Catalog::from_compositions(compositions));
        *self.catalog.write().await = catalog.clone();
        self.initialized.store(true, Ordering::Release);

        info!(
            source = self.loader.source_name(),
            memorandum = catalog.bucket(CollectionType::Memorandum).len(),
            corrective = catalog.bucket(CollectionType::Corrective).len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Compositions refreshed"
        );

        Ok(catalog)
    }
}
