use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::Serialize;

use wardrobe_store::{GarmentCatalog, GarmentId, WearEvent};

/// One garment's wear count within the queried window.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, JsonSchema)]
pub struct FrequencyEntry {
    pub garment_id: GarmentId,
    pub name: String,
    pub count: u64,
}

/// Rank garments by how many wear events reference them.
///
/// `events` must already be restricted to the queried window. Garments no
/// longer present in the catalog are left out of the ranking; a limit of
/// `None` or `Some(0)` means unbounded and is applied after sorting. Ties
/// break by garment id ascending so repeated runs return identical output.
pub fn wear_frequency(
    events: &[WearEvent],
    catalog: &GarmentCatalog,
    limit: Option<usize>,
    descending: bool,
) -> Vec<FrequencyEntry> {
    let mut counts: BTreeMap<GarmentId, u64> = BTreeMap::new();
    for event in events {
        // Guard against duplicate ids inside one event; an outfit wears a
        // garment once no matter how it was recorded.
        let unique: BTreeSet<GarmentId> = event.garment_ids.iter().copied().collect();
        for id in unique {
            *counts.entry(id).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .filter_map(|(id, count)| {
            catalog.name(id).map(|name| FrequencyEntry {
                garment_id: id,
                name: name.to_string(),
                count,
            })
        })
        .collect();

    if descending {
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.garment_id.cmp(&b.garment_id)));
    } else {
        entries.sort_by(|a, b| a.count.cmp(&b.count).then(a.garment_id.cmp(&b.garment_id)));
    }

    if let Some(limit) = limit.filter(|l| *l > 0) {
        entries.truncate(limit);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wardrobe_store::Garment;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
    }

    fn garment(id: GarmentId, name: &str) -> Garment {
        Garment {
            id,
            name: name.to_string(),
            category: "top".to_string(),
            seasons: vec![],
            color: None,
            image_url: None,
        }
    }

    fn event(id: i64, d: &str, ids: &[GarmentId]) -> WearEvent {
        WearEvent {
            id,
            date: date(d),
            garment_ids: ids.to_vec(),
        }
    }

    fn fixture() -> (Vec<WearEvent>, GarmentCatalog) {
        let events = vec![
            event(1, "2025-01-01", &[1, 2]),
            event(2, "2025-01-03", &[1, 2]),
            event(3, "2025-01-10", &[3]),
        ];
        let catalog = GarmentCatalog::new(vec![
            garment(1, "Tee"),
            garment(2, "Jeans"),
            garment(3, "Parka"),
        ]);
        (events, catalog)
    }

    #[test]
    fn ranks_by_count_then_id() {
        let (events, catalog) = fixture();
        let out = wear_frequency(&events, &catalog, None, true);
        let ranked: Vec<(GarmentId, u64)> = out.iter().map(|e| (e.garment_id, e.count)).collect();
        assert_eq!(ranked, vec![(1, 2), (2, 2), (3, 1)]);
    }

    #[test]
    fn ascending_order_reverses_counts_not_tie_break() {
        let (events, catalog) = fixture();
        let out = wear_frequency(&events, &catalog, None, false);
        let ranked: Vec<(GarmentId, u64)> = out.iter().map(|e| (e.garment_id, e.count)).collect();
        assert_eq!(ranked, vec![(3, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn limit_returns_prefix_of_unlimited_result() {
        let (events, catalog) = fixture();
        let full = wear_frequency(&events, &catalog, None, true);
        for l in 0..=4 {
            let limited = wear_frequency(&events, &catalog, Some(l), true);
            if l == 0 {
                assert_eq!(limited, full);
            } else {
                assert!(limited.len() <= l);
                assert_eq!(limited[..], full[..limited.len()]);
            }
        }
    }

    #[test]
    fn duplicate_ids_in_one_event_count_once() {
        let events = vec![event(1, "2025-01-01", &[1, 1, 1])];
        let catalog = GarmentCatalog::new(vec![garment(1, "Tee")]);
        let out = wear_frequency(&events, &catalog, None, true);
        assert_eq!(out[0].count, 1);
    }

    #[test]
    fn stale_references_are_not_ranked() {
        let events = vec![event(1, "2025-01-01", &[1, 9])];
        let catalog = GarmentCatalog::new(vec![garment(1, "Tee")]);
        let out = wear_frequency(&events, &catalog, None, true);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].garment_id, 1);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let (events, catalog) = fixture();
        let first = wear_frequency(&events, &catalog, Some(2), true);
        let second = wear_frequency(&events, &catalog, Some(2), true);
        assert_eq!(first, second);
    }
}
