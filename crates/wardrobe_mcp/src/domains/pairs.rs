use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::Serialize;

use wardrobe_store::{GarmentCatalog, GarmentId, WearEvent};

/// Two garments worn together in the same event, with their joint count.
///
/// `pair` is always the canonical `[a, b]` with `a < b`; `names` follows
/// the same order, with `None` for a garment deleted since the event was
/// recorded.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, JsonSchema)]
pub struct PairEntry {
    pub pair: [GarmentId; 2],
    pub names: [Option<String>; 2],
    pub count: u64,
}

/// Count unordered garment pairs worn together in the same event.
///
/// Each event contributes one increment per unordered pair of distinct
/// garments it references, so k distinct garments yield k*(k-1)/2
/// increments; events with fewer than two garments contribute nothing.
/// Pairs below `min_count` are dropped, the rest sort by count descending
/// with `(a, b)` ascending on ties, and `limit` (`None`/`0` = unbounded)
/// truncates after sorting. A name that no longer resolves comes back as
/// `None`; the pair itself is never dropped for it.
pub fn cooccurring_pairs(
    events: &[WearEvent],
    catalog: &GarmentCatalog,
    min_count: u64,
    limit: Option<usize>,
) -> Vec<PairEntry> {
    let mut counts: BTreeMap<(GarmentId, GarmentId), u64> = BTreeMap::new();
    for event in events {
        // Dedup first: a duplicated id must not fabricate a pair of a
        // garment with itself.
        let unique: BTreeSet<GarmentId> = event.garment_ids.iter().copied().collect();
        let ids: Vec<GarmentId> = unique.into_iter().collect();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                *counts.entry((a, b)).or_insert(0) += 1;
            }
        }
    }

    let mut entries: Vec<PairEntry> = counts
        .into_iter()
        .filter(|(_, count)| *count >= min_count)
        .map(|((a, b), count)| PairEntry {
            pair: [a, b],
            names: [
                catalog.name(a).map(str::to_string),
                catalog.name(b).map(str::to_string),
            ],
            count,
        })
        .collect();

    entries.sort_by(|x, y| y.count.cmp(&x.count).then(x.pair.cmp(&y.pair)));

    if let Some(limit) = limit.filter(|l| *l > 0) {
        entries.truncate(limit);
    }
    entries
}
