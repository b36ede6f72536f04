//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use page_meta::PageScraper;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{fetch_handler, health_handler, publish_handler, published_handler};
use crate::store::PublishStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<PageScraper>,
    pub store: Arc<PublishStore>,
}

/// Build the Axum application router
pub fn build_app(scraper: Arc<PageScraper>, store: Arc<PublishStore>) -> Router {
    let state = AppState { scraper, store };

    Router::new()
        .route("/fetch", post(fetch_handler))
        .route("/publish", post(publish_handler))
        .route("/published", get(published_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        // The browser client is served from a different origin.
        .layer(CorsLayer::permissive())
}
