//! Binary entrypoint for the DiabEye gateway.
//!
//! Reads configuration from environment variables:
//! - `PORT`: listen port (default: "3001")
//! - `BODY_LIMIT_MB`: multipart upload cap in megabytes (default: "5")
//! - `ALLOWED_ORIGINS`: comma-separated CORS allow-list
//! - `CLASSIFIER_URL`: Gradio space prediction endpoint
//! - `GEMINI_API_KEY`: generative-language API key
//! - `DB_USER` / `DB_PASSWORD` / `DB_HOST`: MongoDB credentials (optional)

use std::sync::Arc;

use diabeye_server::clients::classifier::GradioClassifier;
use diabeye_server::clients::datastore::DatastoreHandle;
use diabeye_server::clients::gemini::GeminiClient;
use diabeye_server::config::Config;
use diabeye_server::router::build_router;
use diabeye_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env().expect("invalid environment configuration");

    let datastore = match &config.mongo_uri {
        Some(uri) => DatastoreHandle::connect(uri).await,
        None => {
            tracing::warn!("DB_USER/DB_PASSWORD not set; starting without a datastore");
            DatastoreHandle::disconnected()
        }
    };

    let state = AppState::new(
        Arc::new(GradioClassifier::new(config.classifier_url.clone())),
        Arc::new(GeminiClient::new(config.gemini_api_key.clone())),
        Arc::new(datastore),
    );

    let app = build_router(state, &config.allowed_origins, config.body_limit_bytes);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("DiabEye server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
