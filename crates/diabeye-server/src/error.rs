//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all gateway endpoints. It
//! implements `axum::response::IntoResponse` so every handler converts
//! failures to the envelope in exactly one place; handlers only attach their
//! route-fixed error string.
//!
//! The taxonomy is deliberately two-level: the single client input error
//! (missing upload, 400) and collaborator/processing errors (500). The 400
//! body keeps the exact legacy shape `{"error": "No image file provided"}`
//! the web client matches on.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Gateway errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The multipart request carried no `image` file part (400).
    #[error("no image file provided")]
    MissingImage,

    /// A collaborator call or response handling failed (500).
    ///
    /// `error` is the fixed per-route description; `details` is the
    /// underlying message surfaced to the caller.
    #[error("{error}: {details}")]
    Upstream {
        error: &'static str,
        details: String,
    },
}

impl ApiError {
    /// Wraps a collaborator failure under a route-fixed error string.
    pub fn upstream(error: &'static str, cause: impl std::fmt::Display) -> Self {
        ApiError::Upstream {
            error,
            details: cause.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingImage => {
                let body = serde_json::json!({ "error": "No image file provided" });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            ApiError::Upstream { error, details } => {
                tracing::error!("{}: {}", error, details);
                let body = serde_json::json!({
                    "success": false,
                    "error": error,
                    "details": details,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
