//! Liveness handlers.
//!
//! These answer 200 regardless of datastore connectivity; the datastore
//! readiness flag is only logged so a degraded start is visible in traces.

use axum::extract::State;

use crate::state::AppState;

/// `GET /`
pub async fn root(State(state): State<AppState>) -> &'static str {
    if !state.datastore.is_ready() {
        tracing::debug!("liveness probe served without a ready datastore");
    }
    "Hello DiabEye!"
}

/// `GET /test`
pub async fn test() -> &'static str {
    "DiabEye server is running"
}
