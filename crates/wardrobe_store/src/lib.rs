//! Domain model and `WardrobeStore` trait for wardrobe wear tracking.
//!
//! The store hands out read-only snapshots (wear events plus a garment
//! catalog); everything analytical happens downstream in the consumer.

use async_trait::async_trait;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub mod config;
pub mod memory;
pub mod observability;
pub mod utils;

/// Stable catalog identifier for one garment.
pub type GarmentId = i64;

/// Stable identifier for one recorded wear event.
pub type WearEventId = i64;

#[derive(Debug, Error)]
pub enum WardrobeError {
    #[error("invalid window: start {start} is after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
    #[error("invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("garment {0} not found")]
    GarmentNotFound(GarmentId),
    #[error("wear event {0} not found")]
    EventNotFound(WearEventId),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A catalog entry for one piece of clothing. Immutable once created;
/// deletable, in which case wear history may still reference its id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Garment {
    pub id: GarmentId,
    pub name: String,
    /// Free-form label, e.g. "top" or "bottom".
    pub category: String,
    /// Zero or more season tags, e.g. ["spring", "summer"].
    #[serde(default)]
    pub seasons: Vec<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
}

/// Fields supplied when creating a garment; the store assigns the id.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GarmentDraft {
    pub name: String,
    pub category: String,
    pub seasons: Vec<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
}

/// "On this date, these garments were worn together."
///
/// `garment_ids` is deduplicated and sorted at creation. It may be empty
/// (a day with no recorded outfit) but is never missing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WearEvent {
    pub id: WearEventId,
    pub date: NaiveDate,
    pub garment_ids: Vec<GarmentId>,
}

/// Closed date interval `[start, end]` used to window wear history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Build a window, rejecting `start > end` before anything runs.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WardrobeError> {
        if start > end {
            return Err(WardrobeError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse a window from two date strings (see [`utils::parse_wear_date`]
    /// for the accepted formats).
    pub fn parse(start: &str, end: &str) -> Result<Self, WardrobeError> {
        let start = utils::parse_wear_date(start)?;
        let end = utils::parse_wear_date(end)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Read-only garment snapshot keyed by id.
///
/// Lookups return `Option` so callers decide how to degrade when a wear
/// event references a garment deleted after the fact. Iteration is always
/// id-ascending.
#[derive(Clone, Debug, Default)]
pub struct GarmentCatalog {
    by_id: BTreeMap<GarmentId, Garment>,
}

impl GarmentCatalog {
    pub fn new(garments: Vec<Garment>) -> Self {
        let by_id = garments.into_iter().map(|g| (g.id, g)).collect();
        Self { by_id }
    }

    pub fn get(&self, id: GarmentId) -> Option<&Garment> {
        self.by_id.get(&id)
    }

    pub fn name(&self, id: GarmentId) -> Option<&str> {
        self.by_id.get(&id).map(|g| g.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Garment> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Read/write access to the wardrobe catalog and wear history.
///
/// `fetch_events` and `fetch_catalog` are the snapshot reads the analytics
/// consumer depends on; the rest is the bookkeeping surface exposed to MCP
/// clients.
#[async_trait]
pub trait WardrobeStore: Send + Sync + 'static {
    async fn create_garment(&self, draft: GarmentDraft) -> Result<Garment, WardrobeError>;

    /// Remove a garment from the catalog. Wear events that reference it are
    /// left untouched; readers resolve the dangling id at query time.
    async fn delete_garment(&self, id: GarmentId) -> Result<(), WardrobeError>;

    /// Record that a set of garments was worn together on `date`. Duplicate
    /// ids are collapsed and ids unknown to the catalog are dropped.
    async fn record_wear(
        &self,
        date: NaiveDate,
        garment_ids: &[GarmentId],
    ) -> Result<WearEvent, WardrobeError>;

    async fn delete_event(&self, id: WearEventId) -> Result<(), WardrobeError>;

    /// Events whose date falls inside `window`, or all history when the
    /// window is omitted. Sorted by `(date, id)` ascending.
    async fn fetch_events(
        &self,
        window: Option<&DateWindow>,
    ) -> Result<Vec<WearEvent>, WardrobeError>;

    /// The full catalog, or a subset restricted to `ids`. Unknown ids are
    /// silently omitted, never an error.
    async fn fetch_catalog(
        &self,
        ids: Option<&[GarmentId]>,
    ) -> Result<Vec<Garment>, WardrobeError>;
}
