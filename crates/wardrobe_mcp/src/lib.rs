use std::sync::Arc;

use rmcp::Json;
use rmcp::RoleServer;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    GetPromptRequestParams, GetPromptResult, ListPromptsResult, PaginatedRequestParams,
};
use rmcp::service::RequestContext;
use rmcp::{prompt, prompt_handler, prompt_router, tool, tool_handler, tool_router};

use wardrobe_store::config::Config;
use wardrobe_store::observability::Health;
use wardrobe_store::utils::parse_wear_date;
use wardrobe_store::{DateWindow, GarmentCatalog, GarmentDraft, WardrobeStore, WearEvent};

pub mod domains;
pub mod error;
pub mod middleware;
mod prompts;
pub mod types;

pub use error::{McpError, McpResult};
pub use types::*;

use domains::breakdown::AttributeKind;
use domains::periods::PeriodGranularity;
use domains::summary::WearSummary;

/// MCP handler exposing the wardrobe catalog, the wear log, and the
/// aggregation queries over them.
///
/// Each stats tool is a thin shim: validate parameters, pull one snapshot
/// from the store, hand it to the matching `domains` function.
#[derive(Clone)]
pub struct WardrobeMcpHandler {
    store: Arc<dyn WardrobeStore>,
    config: Config,
    tool_router: rmcp::handler::server::tool::ToolRouter<WardrobeMcpHandler>,
    prompt_router: rmcp::handler::server::router::prompt::PromptRouter<WardrobeMcpHandler>,
}

fn parse_window(start: &str, end: &str) -> McpResult<DateWindow> {
    DateWindow::parse(start, end).map_err(|e| McpError::Validation(e.to_string()))
}

fn event_result(event: &WearEvent) -> WearEventResult {
    WearEventResult {
        id: event.id,
        date: event.date.format("%Y-%m-%d").to_string(),
        garment_ids: event.garment_ids.clone(),
    }
}

#[tool_router]
#[prompt_router]
impl WardrobeMcpHandler {
    pub fn new(store: Arc<dyn WardrobeStore>) -> Self {
        Self::with_config(store, Config::default())
    }

    pub fn with_config(store: Arc<dyn WardrobeStore>, config: Config) -> Self {
        Self {
            store,
            config,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompt_router.list_all().len()
    }

    /// One consistent read per query: windowed events plus the catalog they
    /// resolve against.
    async fn snapshot(
        &self,
        window: Option<&DateWindow>,
    ) -> McpResult<(Vec<WearEvent>, GarmentCatalog)> {
        let events = self.store.fetch_events(window).await?;
        let garments = self.store.fetch_catalog(None).await?;
        Ok((events, GarmentCatalog::new(garments)))
    }

    // === Catalog ===

    #[tool(name = "create_garment", description = "Add a garment to the catalog")]
    async fn create_garment(
        &self,
        params: Parameters<GarmentDraftParams>,
    ) -> Result<Json<wardrobe_store::Garment>, String> {
        let p = params.0;
        let garment = self
            .store
            .create_garment(GarmentDraft {
                name: p.name,
                category: p.category,
                seasons: p.seasons.unwrap_or_default(),
                color: p.color,
                image_url: p.image_url,
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok(Json(garment))
    }

    #[tool(name = "list_garments", description = "List the garment catalog")]
    async fn list_garments(&self) -> Result<Json<CatalogResult>, String> {
        let garments = self
            .store
            .fetch_catalog(None)
            .await
            .map_err(|e| e.to_string())?;
        Ok(Json(CatalogResult { garments }))
    }

    #[tool(
        name = "delete_garment",
        description = "Delete a garment from the catalog; wear history keeps the reference"
    )]
    async fn delete_garment(
        &self,
        params: Parameters<GarmentIdParam>,
    ) -> Result<Json<DeletedResult>, String> {
        let p = params.0;
        self.store
            .delete_garment(p.garment_id)
            .await
            .map_err(|e| e.to_string())?;
        Ok(Json(DeletedResult { deleted: true }))
    }

    // === Wear log ===

    #[tool(
        name = "record_wear",
        description = "Record that a set of garments was worn together on a date"
    )]
    async fn record_wear(
        &self,
        params: Parameters<RecordWearParams>,
    ) -> Result<Json<WearEventResult>, String> {
        let p = params.0;
        let date = parse_wear_date(&p.date).map_err(|e| e.to_string())?;
        let event = self
            .store
            .record_wear(date, &p.garment_ids)
            .await
            .map_err(|e| e.to_string())?;
        Ok(Json(event_result(&event)))
    }

    #[tool(name = "get_wear_log", description = "List wear events in a date window")]
    async fn get_wear_log(
        &self,
        params: Parameters<WindowParams>,
    ) -> Result<Json<WearLogResult>, String> {
        let p = params.0;
        let window = parse_window(&p.start, &p.end).map_err(|e| e.to_string())?;
        let events = self
            .store
            .fetch_events(Some(&window))
            .await
            .map_err(|e| e.to_string())?;
        Ok(Json(WearLogResult {
            events: events.iter().map(event_result).collect(),
        }))
    }

    #[tool(name = "delete_wear_event", description = "Delete a wear event by id")]
    async fn delete_wear_event(
        &self,
        params: Parameters<WearEventIdParam>,
    ) -> Result<Json<DeletedResult>, String> {
        let p = params.0;
        self.store
            .delete_event(p.event_id)
            .await
            .map_err(|e| e.to_string())?;
        Ok(Json(DeletedResult { deleted: true }))
    }

    // === Stats ===

    #[tool(
        name = "wear_frequency",
        description = "Rank garments by wear count in a date window"
    )]
    async fn wear_frequency(
        &self,
        params: Parameters<FrequencyParams>,
    ) -> Result<Json<FrequencyResult>, String> {
        let p = params.0;
        let window = parse_window(&p.start, &p.end).map_err(|e| e.to_string())?;
        let (events, catalog) = self
            .snapshot(Some(&window))
            .await
            .map_err(|e| e.to_string())?;
        let items = domains::frequency::wear_frequency(
            &events,
            &catalog,
            p.limit.map(|l| l as usize),
            p.descending.unwrap_or(true),
        );
        Ok(Json(FrequencyResult { items }))
    }

    #[tool(
        name = "wear_pairs",
        description = "Rank garment pairs worn together in a date window"
    )]
    async fn wear_pairs(
        &self,
        params: Parameters<PairsParams>,
    ) -> Result<Json<PairsResult>, String> {
        let p = params.0;
        let window = parse_window(&p.start, &p.end).map_err(|e| e.to_string())?;
        let (events, catalog) = self
            .snapshot(Some(&window))
            .await
            .map_err(|e| e.to_string())?;
        let min_count = p
            .min_count
            .map(u64::from)
            .unwrap_or(self.config.pair_min_count);
        let limit = p
            .limit
            .map(|l| l as usize)
            .unwrap_or(self.config.pair_limit);
        let pairs = domains::pairs::cooccurring_pairs(&events, &catalog, min_count, Some(limit));
        Ok(Json(PairsResult { pairs }))
    }

    #[tool(
        name = "dormant_garments",
        description = "List garments worn at most `threshold` times across all history"
    )]
    async fn dormant_garments(
        &self,
        params: Parameters<DormantParams>,
    ) -> Result<Json<DormantResult>, String> {
        let p = params.0;
        // Intentionally unwindowed: sleeping means unused over the whole record.
        let (events, catalog) = self.snapshot(None).await.map_err(|e| e.to_string())?;
        let threshold = p
            .threshold
            .map(u64::from)
            .unwrap_or(self.config.dormancy_threshold);
        let items = domains::dormancy::dormant_garments(&events, &catalog, threshold);
        Ok(Json(DormantResult { items }))
    }

    #[tool(
        name = "wear_breakdown",
        description = "Count wear incidences grouped by category, color, or season"
    )]
    async fn wear_breakdown(
        &self,
        params: Parameters<BreakdownParams>,
    ) -> Result<Json<BreakdownResult>, String> {
        let p = params.0;
        let window = parse_window(&p.start, &p.end).map_err(|e| e.to_string())?;
        let kind = p
            .attribute
            .parse::<AttributeKind>()
            .map_err(|e| McpError::Validation(e).to_string())?;
        let (events, catalog) = self
            .snapshot(Some(&window))
            .await
            .map_err(|e| e.to_string())?;
        let groups = domains::breakdown::attribute_breakdown(&events, &catalog, kind);
        Ok(Json(BreakdownResult { groups }))
    }

    #[tool(
        name = "wear_periods",
        description = "Count wear events per ISO week or calendar month"
    )]
    async fn wear_periods(
        &self,
        params: Parameters<PeriodsParams>,
    ) -> Result<Json<PeriodsResult>, String> {
        let p = params.0;
        let window = parse_window(&p.start, &p.end).map_err(|e| e.to_string())?;
        let granularity = p
            .granularity
            .as_deref()
            .unwrap_or("week")
            .parse::<PeriodGranularity>()
            .map_err(|e| McpError::Validation(e).to_string())?;
        // No name resolution needed here, so skip the catalog fetch.
        let events = self
            .store
            .fetch_events(Some(&window))
            .await
            .map_err(|e| e.to_string())?;
        let buckets = domains::periods::period_buckets(&events, granularity)
            .into_iter()
            .map(|b| PeriodBucketResult {
                bucket: b.bucket.format("%Y-%m-%d").to_string(),
                count: b.count,
            })
            .collect();
        Ok(Json(PeriodsResult { buckets }))
    }

    #[tool(
        name = "wear_summary",
        description = "One-shot digest for a window: totals, top item, top category"
    )]
    async fn wear_summary(
        &self,
        params: Parameters<WindowParams>,
    ) -> Result<Json<WearSummary>, String> {
        let p = params.0;
        let window = parse_window(&p.start, &p.end).map_err(|e| e.to_string())?;
        let (events, catalog) = self
            .snapshot(Some(&window))
            .await
            .map_err(|e| e.to_string())?;
        Ok(Json(domains::summary::wear_summary(&events, &catalog)))
    }

    #[tool(name = "store_health", description = "Store readiness and size")]
    async fn store_health(&self) -> Result<Json<Health>, String> {
        let health = Health::probe(self.store.as_ref())
            .await
            .map_err(|e| e.to_string())?;
        Ok(Json(health))
    }

    // === MCP Prompts ===

    /// Guided review of wardrobe usage over a window
    #[prompt(
        name = "wardrobe-review",
        description = "Review wear statistics for a date window"
    )]
    async fn wardrobe_review(
        &self,
        params: Parameters<WardrobeReviewParams>,
    ) -> GetPromptResult {
        let today = chrono::Local::now().date_naive();
        let end = params
            .0
            .end
            .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
        let start = params.0.start.unwrap_or_else(|| {
            (today - chrono::Days::new(30)).format("%Y-%m-%d").to_string()
        });

        prompts::wardrobe_review_prompt(&start, &end)
    }

    /// Suggestions for bringing sleeping garments back into rotation
    #[prompt(
        name = "closet-rotation",
        description = "Plan outfits around rarely-worn garments"
    )]
    async fn closet_rotation(&self, params: Parameters<ClosetRotationParams>) -> GetPromptResult {
        let threshold = params
            .0
            .threshold
            .map(u64::from)
            .unwrap_or(self.config.dormancy_threshold);

        prompts::closet_rotation_prompt(threshold)
    }
}

#[tool_handler]
#[prompt_handler(router = self.prompt_router)]
impl rmcp::ServerHandler for WardrobeMcpHandler {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        let mut info = rmcp::model::ServerInfo::default();
        info.instructions = Some(
            "Wardrobe stats MCP server - tracks which garments were worn on which \
             dates and answers frequency, co-occurrence, dormancy, breakdown, and \
             period queries over that history."
                .into(),
        );
        info.capabilities = rmcp::model::ServerCapabilities::builder()
            .enable_tools()
            .enable_prompts()
            .build();
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_store::memory::MemoryStore;

    fn handler_with_store() -> WardrobeMcpHandler {
        WardrobeMcpHandler::new(Arc::new(MemoryStore::new()))
    }

    async fn seed_garment(handler: &WardrobeMcpHandler, name: &str, category: &str) -> i64 {
        let created = handler
            .create_garment(Parameters(GarmentDraftParams {
                name: name.to_string(),
                category: category.to_string(),
                seasons: None,
                color: None,
                image_url: None,
            }))
            .await
            .expect("create_garment");
        created.0.id
    }

    async fn seed_wear(handler: &WardrobeMcpHandler, date: &str, ids: Vec<i64>) {
        handler
            .record_wear(Parameters(RecordWearParams {
                date: date.to_string(),
                garment_ids: ids,
            }))
            .await
            .expect("record_wear");
    }

    #[tokio::test]
    async fn handler_registers_every_tool() {
        let handler = handler_with_store();
        let _clone = handler.clone();
        let tools = handler.tool_router.list_all();
        for name in [
            "create_garment",
            "list_garments",
            "delete_garment",
            "record_wear",
            "get_wear_log",
            "delete_wear_event",
            "wear_frequency",
            "wear_pairs",
            "dormant_garments",
            "wear_breakdown",
            "wear_periods",
            "wear_summary",
            "store_health",
        ] {
            assert!(
                tools.iter().any(|t| t.name == name),
                "missing tool: {name}"
            );
        }
        assert_eq!(handler.prompt_count(), 2);
    }

    #[tokio::test]
    async fn frequency_tool_runs_end_to_end() {
        let handler = handler_with_store();
        let tee = seed_garment(&handler, "Tee", "top").await;
        let jeans = seed_garment(&handler, "Jeans", "bottom").await;
        seed_wear(&handler, "2025-01-01", vec![tee, jeans]).await;
        seed_wear(&handler, "2025-01-03", vec![tee]).await;

        let out = handler
            .wear_frequency(Parameters(FrequencyParams {
                start: "2025-01-01".into(),
                end: "2025-01-31".into(),
                limit: None,
                descending: None,
            }))
            .await
            .expect("frequency");
        let ranked: Vec<(i64, u64)> = out.0.items.iter().map(|i| (i.garment_id, i.count)).collect();
        assert_eq!(ranked, vec![(tee, 2), (jeans, 1)]);
    }

    #[tokio::test]
    async fn inverted_window_is_rejected_before_running() {
        let handler = handler_with_store();
        let err = handler
            .wear_frequency(Parameters(FrequencyParams {
                start: "2025-02-01".into(),
                end: "2025-01-01".into(),
                limit: None,
                descending: None,
            }))
            .await
            .err()
            .unwrap();
        assert!(err.contains("invalid window"));
    }

    #[tokio::test]
    async fn unknown_attribute_lists_the_accepted_values() {
        let handler = handler_with_store();
        let err = handler
            .wear_breakdown(Parameters(BreakdownParams {
                start: "2025-01-01".into(),
                end: "2025-01-31".into(),
                attribute: "fabric".into(),
            }))
            .await
            .err()
            .unwrap();
        assert!(err.contains("category, color, season"));
    }

    #[tokio::test]
    async fn unknown_granularity_lists_the_accepted_values() {
        let handler = handler_with_store();
        let err = handler
            .wear_periods(Parameters(PeriodsParams {
                start: "2025-01-01".into(),
                end: "2025-01-31".into(),
                granularity: Some("day".into()),
            }))
            .await
            .err()
            .unwrap();
        assert!(err.contains("week, month"));
    }

    #[tokio::test]
    async fn pair_defaults_come_from_config() {
        let store = Arc::new(MemoryStore::new());
        let config = Config {
            pair_limit: 1,
            pair_min_count: 1,
            dormancy_threshold: 1,
        };
        let handler = WardrobeMcpHandler::with_config(store, config);
        let a = seed_garment(&handler, "Tee", "top").await;
        let b = seed_garment(&handler, "Jeans", "bottom").await;
        let c = seed_garment(&handler, "Parka", "outer").await;
        seed_wear(&handler, "2025-01-01", vec![a, b, c]).await;

        let out = handler
            .wear_pairs(Parameters(PairsParams {
                start: "2025-01-01".into(),
                end: "2025-01-31".into(),
                min_count: None,
                limit: None,
            }))
            .await
            .expect("pairs");
        assert_eq!(out.0.pairs.len(), 1);
        assert_eq!(out.0.pairs[0].pair, [a, b]);
    }

    #[tokio::test]
    async fn summary_over_empty_window_reports_insufficient_data() {
        let handler = handler_with_store();
        let out = handler
            .wear_summary(Parameters(WindowParams {
                start: "2025-01-01".into(),
                end: "2025-01-31".into(),
            }))
            .await
            .expect("summary");
        assert_eq!(out.0.total_outfits, 0);
        assert_eq!(out.0.top_item, None);
        assert_eq!(out.0.top_category, None);
        assert_eq!(out.0.comment, domains::summary::EMPTY_SUMMARY_COMMENT);
    }

    #[tokio::test]
    async fn deleting_a_garment_degrades_pair_names_not_results() {
        let handler = handler_with_store();
        let a = seed_garment(&handler, "Tee", "top").await;
        let b = seed_garment(&handler, "Jeans", "bottom").await;
        seed_wear(&handler, "2025-01-01", vec![a, b]).await;

        handler
            .delete_garment(Parameters(GarmentIdParam { garment_id: b }))
            .await
            .expect("delete");

        let out = handler
            .wear_pairs(Parameters(PairsParams {
                start: "2025-01-01".into(),
                end: "2025-01-31".into(),
                min_count: None,
                limit: None,
            }))
            .await
            .expect("pairs");
        assert_eq!(out.0.pairs.len(), 1);
        assert_eq!(out.0.pairs[0].names[0].as_deref(), Some("Tee"));
        assert_eq!(out.0.pairs[0].names[1], None);
    }
}
