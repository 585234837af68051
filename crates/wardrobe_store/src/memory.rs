//! In-memory `WardrobeStore` used by the MCP server and tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    DateWindow, Garment, GarmentDraft, GarmentId, WardrobeError, WardrobeStore, WearEvent,
    WearEventId,
};

struct Inner {
    garments: BTreeMap<GarmentId, Garment>,
    events: BTreeMap<WearEventId, WearEvent>,
    next_garment_id: GarmentId,
    next_event_id: WearEventId,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            garments: BTreeMap::new(),
            events: BTreeMap::new(),
            next_garment_id: 1,
            next_event_id: 1,
        }
    }
}

/// Keeps the whole catalog and wear history behind one async mutex.
///
/// Deleting a garment does not rewrite history: wear events keep the id and
/// readers resolve it against the catalog at query time.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WardrobeStore for MemoryStore {
    async fn create_garment(&self, draft: GarmentDraft) -> Result<Garment, WardrobeError> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_garment_id;
        inner.next_garment_id += 1;
        let garment = Garment {
            id,
            name: draft.name,
            category: draft.category,
            seasons: draft.seasons,
            color: draft.color,
            image_url: draft.image_url,
        };
        inner.garments.insert(id, garment.clone());
        debug!(id, name = %garment.name, "created garment");
        Ok(garment)
    }

    async fn delete_garment(&self, id: GarmentId) -> Result<(), WardrobeError> {
        let mut inner = self.inner.lock().await;
        if inner.garments.remove(&id).is_none() {
            return Err(WardrobeError::GarmentNotFound(id));
        }
        debug!(id, "deleted garment");
        Ok(())
    }

    async fn record_wear(
        &self,
        date: NaiveDate,
        garment_ids: &[GarmentId],
    ) -> Result<WearEvent, WardrobeError> {
        let mut inner = self.inner.lock().await;
        // Collapse duplicates and drop ids unknown to the catalog; the
        // resulting set is sorted by construction.
        let unique: BTreeSet<GarmentId> = garment_ids
            .iter()
            .copied()
            .filter(|id| inner.garments.contains_key(id))
            .collect();
        let id = inner.next_event_id;
        inner.next_event_id += 1;
        let event = WearEvent {
            id,
            date,
            garment_ids: unique.into_iter().collect(),
        };
        inner.events.insert(id, event.clone());
        debug!(id, %date, garments = event.garment_ids.len(), "recorded wear event");
        Ok(event)
    }

    async fn delete_event(&self, id: WearEventId) -> Result<(), WardrobeError> {
        let mut inner = self.inner.lock().await;
        if inner.events.remove(&id).is_none() {
            return Err(WardrobeError::EventNotFound(id));
        }
        debug!(id, "deleted wear event");
        Ok(())
    }

    async fn fetch_events(
        &self,
        window: Option<&DateWindow>,
    ) -> Result<Vec<WearEvent>, WardrobeError> {
        let inner = self.inner.lock().await;
        let mut out: Vec<WearEvent> = inner
            .events
            .values()
            .filter(|e| window.is_none_or(|w| w.contains(e.date)))
            .cloned()
            .collect();
        out.sort_by_key(|e| (e.date, e.id));
        Ok(out)
    }

    async fn fetch_catalog(
        &self,
        ids: Option<&[GarmentId]>,
    ) -> Result<Vec<Garment>, WardrobeError> {
        let inner = self.inner.lock().await;
        let out = match ids {
            None => inner.garments.values().cloned().collect(),
            Some(ids) => {
                let wanted: BTreeSet<GarmentId> = ids.iter().copied().collect();
                wanted
                    .into_iter()
                    .filter_map(|id| inner.garments.get(&id).cloned())
                    .collect()
            }
        };
        Ok(out)
    }
}
