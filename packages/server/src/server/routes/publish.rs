use axum::{extract::Extension, Json};
use chrono::{DateTime, Utc};
use page_meta::PageMeta;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::server::app::AppState;
use crate::server::routes::error::ApiError;
use crate::store::PublishedProduct;

#[derive(Deserialize)]
pub struct PublishRequest {
    #[serde(flatten)]
    pub meta: PageMeta,
    /// Caller-supplied publish time; stamped server-side when omitted.
    #[serde(rename = "addedAt")]
    pub added_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct PublishResponse {
    ok: bool,
    product: PublishedProduct,
}

/// Append a reviewed metadata record to the published list.
pub async fn publish_handler(
    Extension(state): Extension<AppState>,
    Json(req): Json<PublishRequest>,
) -> Result<Json<PublishResponse>, ApiError> {
    let product = state.store.publish(req.meta, req.added_at).await?;
    info!(id = %product.id, url = %product.meta.url, "Product published");

    Ok(Json(PublishResponse { ok: true, product }))
}
