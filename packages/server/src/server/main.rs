// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use page_meta::PageScraper;
use server_core::{server::build_app, store::PublishStore, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vitrine API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Open the publish store
    let store = PublishStore::open(&config.store_path).context("Failed to open publish store")?;
    tracing::info!(path = %config.store_path.display(), "Publish store ready");

    // Build the page scraper
    let scraper = PageScraper::new().context("Failed to create page scraper")?;

    // Build application
    let app = build_app(Arc::new(scraper), Arc::new(store));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
