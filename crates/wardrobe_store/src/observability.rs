use schemars::JsonSchema;
use serde::Serialize;

use crate::{WardrobeError, WardrobeStore};

/// Readiness snapshot with store sizes, for health reporting.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, JsonSchema)]
pub struct Health {
    pub ready: bool,
    pub garments: u64,
    pub events: u64,
}

impl Health {
    /// Probe a store by counting its catalog and full history.
    pub async fn probe(store: &dyn WardrobeStore) -> Result<Self, WardrobeError> {
        let garments = store.fetch_catalog(None).await?.len() as u64;
        let events = store.fetch_events(None).await?.len() as u64;
        Ok(Self {
            ready: true,
            garments,
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::GarmentDraft;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn probe_counts_catalog_and_history() {
        let store = MemoryStore::new();
        let g = store
            .create_garment(GarmentDraft {
                name: "Raincoat".into(),
                category: "outer".into(),
                ..Default::default()
            })
            .await
            .expect("garment");
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).expect("date");
        store.record_wear(date, &[g.id]).await.expect("event");

        let health = Health::probe(&store).await.expect("health");
        assert!(health.ready);
        assert_eq!(health.garments, 1);
        assert_eq!(health.events, 1);
    }
}
