//! Seed an in-memory store from the command line and print a month's digest.
//!
//! Run with: `cargo run -p wardrobe_mcp --example offline_summary`

use wardrobe_mcp::domains::frequency::wear_frequency;
use wardrobe_mcp::domains::summary::wear_summary;
use wardrobe_store::memory::MemoryStore;
use wardrobe_store::{DateWindow, GarmentCatalog, GarmentDraft, WardrobeStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let store = MemoryStore::new();

    let tee = store
        .create_garment(GarmentDraft {
            name: "White Tee".into(),
            category: "top".into(),
            seasons: vec!["spring".into(), "summer".into()],
            color: Some("white".into()),
            image_url: None,
        })
        .await?;
    let jeans = store
        .create_garment(GarmentDraft {
            name: "Raw Denim".into(),
            category: "bottom".into(),
            seasons: vec![],
            color: Some("indigo".into()),
            image_url: None,
        })
        .await?;

    for day in [1, 4, 9, 15, 22] {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 6, day).expect("date");
        let outfit = if day % 2 == 0 {
            vec![tee.id]
        } else {
            vec![tee.id, jeans.id]
        };
        store.record_wear(date, &outfit).await?;
    }

    let window = DateWindow::parse("2025-06-01", "2025-06-30")?;
    let events = store.fetch_events(Some(&window)).await?;
    let catalog = GarmentCatalog::new(store.fetch_catalog(None).await?);

    let summary = wear_summary(&events, &catalog);
    println!("outfits recorded: {}", summary.total_outfits);
    println!("comment: {}", summary.comment);

    for entry in wear_frequency(&events, &catalog, None, true) {
        println!("  {:>3}x {}", entry.count, entry.name);
    }

    Ok(())
}
