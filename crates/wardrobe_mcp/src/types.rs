use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use wardrobe_store::Garment;

use crate::domains::breakdown::BreakdownEntry;
use crate::domains::dormancy::DormantEntry;
use crate::domains::frequency::FrequencyEntry;
use crate::domains::pairs::PairEntry;

// === Catalog & wear log ===

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GarmentDraftParams {
    /// Display name, e.g. "Blue Oxford Shirt"
    pub name: String,
    /// Free-form category label, e.g. "top", "bottom", "outer"
    pub category: String,
    /// Season tags, e.g. ["spring", "summer"]
    pub seasons: Option<Vec<String>>,
    pub color: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GarmentIdParam {
    pub garment_id: i64,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct CatalogResult {
    pub garments: Vec<Garment>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RecordWearParams {
    /// Date worn (YYYY-MM-DD)
    pub date: String,
    /// Garments worn together that day; duplicates are collapsed
    pub garment_ids: Vec<i64>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct WearEventIdParam {
    pub event_id: i64,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct WearEventResult {
    pub id: i64,
    /// YYYY-MM-DD
    pub date: String,
    pub garment_ids: Vec<i64>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct WearLogResult {
    pub events: Vec<WearEventResult>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct DeletedResult {
    pub deleted: bool,
}

// === Stats ===

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct FrequencyParams {
    /// Window start (YYYY-MM-DD)
    pub start: String,
    /// Window end (YYYY-MM-DD)
    pub end: String,
    /// Maximum results; 0 or omitted = unbounded
    pub limit: Option<u32>,
    /// Most-worn first (default: true)
    pub descending: Option<bool>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct FrequencyResult {
    pub items: Vec<FrequencyEntry>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct PairsParams {
    /// Window start (YYYY-MM-DD)
    pub start: String,
    /// Window end (YYYY-MM-DD)
    pub end: String,
    /// Minimum joint count for a pair to appear (default: 1)
    pub min_count: Option<u32>,
    /// Maximum pairs to return (default: 10)
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct PairsResult {
    pub pairs: Vec<PairEntry>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DormantParams {
    /// Max all-time wear count for a garment to count as sleeping (default: 1)
    pub threshold: Option<u32>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct DormantResult {
    pub items: Vec<DormantEntry>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct BreakdownParams {
    /// Window start (YYYY-MM-DD)
    pub start: String,
    /// Window end (YYYY-MM-DD)
    pub end: String,
    /// Attribute to group by: "category", "color", or "season"
    pub attribute: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct BreakdownResult {
    pub groups: Vec<BreakdownEntry>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct PeriodsParams {
    /// Window start (YYYY-MM-DD)
    pub start: String,
    /// Window end (YYYY-MM-DD)
    pub end: String,
    /// Bucket granularity: "week" or "month" (default: week)
    pub granularity: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct PeriodBucketResult {
    /// First day of the bucket (ISO date: the Monday for weeks, the 1st for
    /// months)
    pub bucket: String,
    pub count: u64,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct PeriodsResult {
    pub buckets: Vec<PeriodBucketResult>,
}

/// Bare closed window, shared by the wear log listing and the summary.
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct WindowParams {
    /// Window start (YYYY-MM-DD)
    pub start: String,
    /// Window end (YYYY-MM-DD)
    pub end: String,
}

// === Prompt parameters ===

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct WardrobeReviewParams {
    /// Window start (YYYY-MM-DD, default: 30 days ago)
    pub start: Option<String>,
    /// Window end (YYYY-MM-DD, default: today)
    pub end: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ClosetRotationParams {
    /// Wear-count threshold for sleeping items (default: 1)
    pub threshold: Option<u32>,
}
