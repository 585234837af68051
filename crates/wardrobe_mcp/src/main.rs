use std::sync::Arc;

use wardrobe_mcp::WardrobeMcpHandler;
use wardrobe_mcp::middleware::LoggingStore;
use wardrobe_store::config::Config;
use wardrobe_store::memory::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure logging from env var `WARDROBE_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("WARDROBE_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    // Append per-target overrides to keep rmcp internals quiet by default
    let combined_filter = format!("{},rmcp=warn,serve_inner=warn", log_env);
    let env_filter = tracing_subscriber::EnvFilter::try_new(combined_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,rmcp=warn,serve_inner=warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!("wardrobe_mcp: log filter: {}", log_env);

    let config = Config::from_env()?;
    let store = LoggingStore::new(MemoryStore::new());
    let handler = WardrobeMcpHandler::with_config(Arc::new(store), config);

    tracing::info!(
        "wardrobe_mcp: registered {} tools and {} prompts",
        handler.tool_count(),
        handler.prompt_count()
    );

    // Start RMCP server over stdio transport so it's immediately usable with MCP clients
    tracing::info!("wardrobe_mcp: starting stdio MCP server...");

    use rmcp::serve_server;
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let server = serve_server(handler, transport).await?;

    tracing::info!("wardrobe_mcp: service initialized as server");

    server.waiting().await?;

    Ok(())
}
