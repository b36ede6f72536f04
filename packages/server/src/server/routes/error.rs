use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use page_meta::FetchError;
use serde::Serialize;

use crate::store::StoreError;

/// Error body shared by every route: `{ "ok": false, "error": … }`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub error: String,
}

/// Route-level error: a status code plus the structured error body.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                ok: false,
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<FetchError> for ApiError {
    /// Retrieval failures are upstream errors: the page could not be
    /// fetched. The message is surfaced to the caller.
    fn from(err: FetchError) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let status = match err {
            StoreError::MissingUrl => StatusCode::BAD_REQUEST,
            StoreError::Io(_) | StoreError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}
