use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;
use crate::store::PublishedProduct;

#[derive(Serialize)]
pub struct PublishedResponse {
    ok: bool,
    items: Vec<PublishedProduct>,
}

/// The full published list, most recent first.
///
/// Always answers 200 with `ok: true`; a missing or broken store reads as
/// an empty list.
pub async fn published_handler(Extension(state): Extension<AppState>) -> Json<PublishedResponse> {
    let items = state.store.list().await;
    Json(PublishedResponse { ok: true, items })
}
