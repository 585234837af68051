use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::Serialize;

use wardrobe_store::{GarmentCatalog, GarmentId, WearEvent};

/// A garment whose all-time wear count sits at or below the threshold.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, JsonSchema)]
pub struct DormantEntry {
    pub garment_id: GarmentId,
    pub name: String,
    pub count: u64,
}

/// Find garments worn at most `threshold` times across all history.
///
/// This query is deliberately unwindowed: "sleeping" means unused over the
/// whole record. It walks the catalog rather than the events so garments
/// never worn at all surface with a count of zero. Output is count
/// ascending, then id ascending.
pub fn dormant_garments(
    events: &[WearEvent],
    catalog: &GarmentCatalog,
    threshold: u64,
) -> Vec<DormantEntry> {
    let mut counts: BTreeMap<GarmentId, u64> = BTreeMap::new();
    for event in events {
        let unique: BTreeSet<GarmentId> = event.garment_ids.iter().copied().collect();
        for id in unique {
            *counts.entry(id).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<DormantEntry> = catalog
        .iter()
        .map(|g| DormantEntry {
            garment_id: g.id,
            name: g.name.clone(),
            count: counts.get(&g.id).copied().unwrap_or(0),
        })
        .filter(|e| e.count <= threshold)
        .collect();

    entries.sort_by(|a, b| a.count.cmp(&b.count).then(a.garment_id.cmp(&b.garment_id)));
    entries
}
