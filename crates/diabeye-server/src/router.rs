//! Router assembly for the DiabEye gateway.
//!
//! [`build_router`] wires all handler functions to their routes with CORS
//! and tracing middleware layers. Every route is registered eagerly; none
//! depends on the datastore connect step having completed.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// CORS uses an explicit origin allow-list with credentials (a wildcard
/// origin cannot be combined with credentials). `body_limit_bytes` caps the
/// multipart upload size.
pub fn build_router(
    state: AppState,
    allowed_origins: &[String],
    body_limit_bytes: usize,
) -> Router {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/", get(handlers::liveness::root))
        .route("/test", get(handlers::liveness::test))
        .route("/api/predict", post(handlers::predict::predict))
        .route("/api/chat", post(handlers::chat::chat))
        .route(
            "/api/exercise-suggestions",
            post(handlers::exercise::exercise_suggestions),
        )
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
