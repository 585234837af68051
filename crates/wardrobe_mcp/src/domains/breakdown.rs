use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use schemars::JsonSchema;
use serde::Serialize;

use wardrobe_store::{Garment, GarmentCatalog, WearEvent};

/// Label used when an attribute value is absent or the garment itself no
/// longer resolves.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Which garment attribute a breakdown groups by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeKind {
    Category,
    Color,
    Season,
}

impl AttributeKind {
    /// Labels one garment contributes per incidence. Seasons fan out to one
    /// label per tag; absent or empty values map to [`UNKNOWN_LABEL`].
    fn labels(self, garment: &Garment) -> Vec<String> {
        match self {
            AttributeKind::Category => {
                if garment.category.trim().is_empty() {
                    vec![UNKNOWN_LABEL.to_string()]
                } else {
                    vec![garment.category.clone()]
                }
            }
            AttributeKind::Color => match garment.color.as_deref() {
                Some(color) if !color.trim().is_empty() => vec![color.to_string()],
                _ => vec![UNKNOWN_LABEL.to_string()],
            },
            AttributeKind::Season => {
                let tags: Vec<String> = garment
                    .seasons
                    .iter()
                    .filter(|tag| !tag.trim().is_empty())
                    .cloned()
                    .collect();
                if tags.is_empty() {
                    vec![UNKNOWN_LABEL.to_string()]
                } else {
                    tags
                }
            }
        }
    }
}

impl FromStr for AttributeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "category" => Ok(AttributeKind::Category),
            "color" => Ok(AttributeKind::Color),
            "season" => Ok(AttributeKind::Season),
            other => Err(format!(
                "unknown attribute {other:?}: expected one of category, color, season"
            )),
        }
    }
}

/// One attribute label and its incidence count.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, JsonSchema)]
pub struct BreakdownEntry {
    pub label: String,
    pub count: u64,
}

/// Group wear incidences by a garment attribute and count each label.
///
/// An incidence whose garment has left the catalog still counts, under
/// [`UNKNOWN_LABEL`]; counting never requires the name. Output is count
/// descending; the accumulator iterates label-ascending and the sort is
/// stable, so equal counts come back in alphabetical label order.
pub fn attribute_breakdown(
    events: &[WearEvent],
    catalog: &GarmentCatalog,
    kind: AttributeKind,
) -> Vec<BreakdownEntry> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for event in events {
        let unique: BTreeSet<_> = event.garment_ids.iter().copied().collect();
        for id in unique {
            let labels = match catalog.get(id) {
                Some(garment) => kind.labels(garment),
                None => vec![UNKNOWN_LABEL.to_string()],
            };
            for label in labels {
                *counts.entry(label).or_insert(0) += 1;
            }
        }
    }

    let mut entries: Vec<BreakdownEntry> = counts
        .into_iter()
        .map(|(label, count)| BreakdownEntry { label, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wardrobe_store::GarmentId;

    fn garment(id: GarmentId, category: &str, seasons: &[&str], color: Option<&str>) -> Garment {
        Garment {
            id,
            name: format!("garment-{id}"),
            category: category.to_string(),
            seasons: seasons.iter().map(|s| s.to_string()).collect(),
            color: color.map(str::to_string),
            image_url: None,
        }
    }

    fn event(id: i64, ids: &[GarmentId]) -> WearEvent {
        WearEvent {
            id,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).expect("date"),
            garment_ids: ids.to_vec(),
        }
    }

    #[test]
    fn parses_selectors_case_insensitively() {
        assert_eq!("Category".parse::<AttributeKind>(), Ok(AttributeKind::Category));
        assert_eq!("color".parse::<AttributeKind>(), Ok(AttributeKind::Color));
        assert_eq!("SEASON".parse::<AttributeKind>(), Ok(AttributeKind::Season));
        let err = "fabric".parse::<AttributeKind>().unwrap_err();
        assert!(err.contains("category, color, season"));
    }

    #[test]
    fn category_counts_incidences_per_label() {
        let catalog = GarmentCatalog::new(vec![
            garment(1, "top", &[], None),
            garment(2, "bottom", &[], None),
        ]);
        let events = vec![event(1, &[1, 2]), event(2, &[1])];

        let out = attribute_breakdown(&events, &catalog, AttributeKind::Category);
        assert_eq!(
            out,
            vec![
                BreakdownEntry { label: "top".into(), count: 2 },
                BreakdownEntry { label: "bottom".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn seasons_fan_out_one_count_per_tag() {
        let catalog = GarmentCatalog::new(vec![garment(1, "top", &["spring", "summer"], None)]);
        let events = vec![event(1, &[1])];

        let out = attribute_breakdown(&events, &catalog, AttributeKind::Season);
        assert_eq!(
            out,
            vec![
                BreakdownEntry { label: "spring".into(), count: 1 },
                BreakdownEntry { label: "summer".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn missing_values_group_under_unknown() {
        let catalog = GarmentCatalog::new(vec![
            garment(1, "top", &[], None),
            garment(2, "top", &[], Some("")),
        ]);
        // garment 9 was deleted from the catalog after the event
        let events = vec![event(1, &[1, 2, 9])];

        let out = attribute_breakdown(&events, &catalog, AttributeKind::Color);
        assert_eq!(
            out,
            vec![BreakdownEntry { label: UNKNOWN_LABEL.into(), count: 3 }]
        );
    }

    #[test]
    fn equal_counts_come_back_alphabetically() {
        let catalog = GarmentCatalog::new(vec![
            garment(1, "top", &[], Some("navy")),
            garment(2, "top", &[], Some("black")),
        ]);
        let events = vec![event(1, &[1, 2])];

        let out = attribute_breakdown(&events, &catalog, AttributeKind::Color);
        let labels: Vec<&str> = out.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["black", "navy"]);
    }

    #[test]
    fn untagged_seasons_do_not_reach_real_buckets() {
        let catalog = GarmentCatalog::new(vec![
            garment(1, "top", &["spring", "summer"], None),
            garment(2, "top", &[], None),
        ]);
        let events = vec![event(1, &[1, 2])];

        let out = attribute_breakdown(&events, &catalog, AttributeKind::Season);
        assert!(out.iter().all(|e| e.label != "fall" && e.label != "winter"));
        assert!(out.contains(&BreakdownEntry { label: UNKNOWN_LABEL.into(), count: 1 }));
    }
}
