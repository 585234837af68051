use schemars::JsonSchema;
use serde::Serialize;

use wardrobe_store::{GarmentCatalog, WearEvent};

use super::breakdown::{AttributeKind, BreakdownEntry, attribute_breakdown};
use super::frequency::{FrequencyEntry, wear_frequency};

/// Comment used when the window holds no rankable wear data.
pub const EMPTY_SUMMARY_COMMENT: &str = "insufficient data";

/// One-shot digest over a window: totals, top item, top category, comment.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, JsonSchema)]
pub struct WearSummary {
    /// Number of wear events in the window, not garment incidences.
    pub total_outfits: u64,
    pub top_item: Option<FrequencyEntry>,
    pub top_category: Option<BreakdownEntry>,
    pub comment: String,
}

/// Compose the digest from the frequency and breakdown results.
///
/// Pure composition, no algorithm of its own: top item is the frequency
/// ranking cut to one, top category the highest breakdown entry (ties
/// resolve alphabetically, see [`attribute_breakdown`]).
pub fn wear_summary(events: &[WearEvent], catalog: &GarmentCatalog) -> WearSummary {
    let total_outfits = events.len() as u64;
    let top_item = wear_frequency(events, catalog, Some(1), true)
        .into_iter()
        .next();
    let top_category = attribute_breakdown(events, catalog, AttributeKind::Category)
        .into_iter()
        .next();
    let comment = match &top_item {
        Some(item) => format!("You wore '{}' most often in this period.", item.name),
        None => EMPTY_SUMMARY_COMMENT.to_string(),
    };

    WearSummary {
        total_outfits,
        top_item,
        top_category,
        comment,
    }
}
