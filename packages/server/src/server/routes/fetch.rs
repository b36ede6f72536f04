use axum::{extract::Extension, Json};
use page_meta::PageMeta;
use serde::{Deserialize, Serialize};

use crate::server::app::AppState;
use crate::server::routes::error::ApiError;

#[derive(Deserialize)]
pub struct FetchRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize)]
pub struct FetchResponse {
    ok: bool,
    meta: PageMeta,
}

/// Fetch display metadata for a product page URL.
///
/// The URL is not validated beyond presence; a malformed one fails during
/// retrieval and surfaces as a retrieval error.
pub async fn fetch_handler(
    Extension(state): Extension<AppState>,
    Json(req): Json<FetchRequest>,
) -> Result<Json<FetchResponse>, ApiError> {
    if req.url.is_empty() {
        return Err(ApiError::validation("missing url"));
    }

    let meta = state.scraper.fetch_meta(&req.url).await?;
    Ok(Json(FetchResponse { ok: true, meta }))
}
