use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    store: StoreHealth,
}

#[derive(Serialize)]
pub struct StoreHealth {
    status: String,
    items: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Probes the publish store directly (a corrupt or unreadable store file is
/// reported here, even though `/published` fails open on it).
///
/// Returns 200 OK when the store is readable, 503 Service Unavailable
/// otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let store_health = match state.store.check().await {
        Ok(items) => StoreHealth {
            status: "ok".to_string(),
            items,
            error: None,
        },
        Err(e) => StoreHealth {
            status: "error".to_string(),
            items: 0,
            error: Some(e.to_string()),
        },
    };

    let is_healthy = store_health.status == "ok";
    let overall_status = if is_healthy { "healthy" } else { "unhealthy" };

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: overall_status.to_string(),
            store: store_health,
        }),
    )
}
