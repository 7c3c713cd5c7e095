//! HTTP error responses.
//!
//! The store signals absence with `Option`/`bool`; this module is where
//! those sentinels become status codes. Failure bodies carry JSON
//! `{"error": "<message>"}` so clients get a machine-readable reason
//! alongside the status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Errors a handler can surface to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested id has no live todo.
    #[error("Todo not found")]
    NotFound,

    /// The create payload had a missing or empty title.
    #[error("title is required")]
    TitleRequired,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::TitleRequired => StatusCode::BAD_REQUEST,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let resp = ApiError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn title_required_maps_to_400() {
        let resp = ApiError::TitleRequired.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
