//! Middleware layer for cross-cutting concerns.
//!
//! Wraps a `WardrobeStore` so every storage call is logged with its
//! duration, keeping the handlers free of instrumentation noise and giving
//! one place to add further layers later.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::debug;

use wardrobe_store::{
    DateWindow, Garment, GarmentDraft, GarmentId, WardrobeError, WardrobeStore, WearEvent,
    WearEventId,
};

/// Logging wrapper for any `WardrobeStore` implementation.
#[derive(Clone)]
pub struct LoggingStore<S: WardrobeStore> {
    inner: Arc<S>,
}

impl<S: WardrobeStore> LoggingStore<S> {
    /// Create a new logging middleware wrapper.
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Execute a fallible store operation with logging.
    async fn with_logging<F, Fut, T>(&self, operation: F, name: &str) -> Result<T, WardrobeError>
    where
        F: FnOnce(Arc<S>) -> Fut,
        Fut: std::future::Future<Output = Result<T, WardrobeError>>,
    {
        let start = Instant::now();
        debug!("Starting store operation: {}", name);

        let result = operation(self.inner.clone()).await;

        let duration = start.elapsed();
        match &result {
            Ok(_) => {
                debug!("Store operation completed: {} in {:?}", name, duration);
            }
            Err(e) => {
                debug!(
                    "Store operation failed: {} in {:?} - error: {}",
                    name, duration, e
                );
            }
        }

        result
    }
}

#[async_trait::async_trait]
impl<S: WardrobeStore> WardrobeStore for LoggingStore<S> {
    async fn create_garment(&self, draft: GarmentDraft) -> Result<Garment, WardrobeError> {
        self.with_logging(
            |store| async move { store.create_garment(draft).await },
            "create_garment",
        )
        .await
    }

    async fn delete_garment(&self, id: GarmentId) -> Result<(), WardrobeError> {
        self.with_logging(
            |store| async move { store.delete_garment(id).await },
            "delete_garment",
        )
        .await
    }

    async fn record_wear(
        &self,
        date: NaiveDate,
        garment_ids: &[GarmentId],
    ) -> Result<WearEvent, WardrobeError> {
        self.with_logging(
            |store| async move { store.record_wear(date, garment_ids).await },
            "record_wear",
        )
        .await
    }

    async fn delete_event(&self, id: WearEventId) -> Result<(), WardrobeError> {
        self.with_logging(
            |store| async move { store.delete_event(id).await },
            "delete_event",
        )
        .await
    }

    async fn fetch_events(
        &self,
        window: Option<&DateWindow>,
    ) -> Result<Vec<WearEvent>, WardrobeError> {
        self.with_logging(
            |store| async move { store.fetch_events(window).await },
            "fetch_events",
        )
        .await
    }

    async fn fetch_catalog(
        &self,
        ids: Option<&[GarmentId]>,
    ) -> Result<Vec<Garment>, WardrobeError> {
        self.with_logging(
            |store| async move { store.fetch_catalog(ids).await },
            "fetch_catalog",
        )
        .await
    }
}
