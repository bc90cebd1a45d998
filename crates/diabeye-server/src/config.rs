//! Environment-driven configuration.
//!
//! [`Config::from_env`] reads everything the gateway needs from the process
//! environment. All values have defaults except the MongoDB credentials,
//! whose absence simply leaves the datastore disconnected (the HTTP surface
//! does not depend on it).

use std::env;

/// Configuration read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (`PORT`, default 3001).
    pub port: u16,
    /// Multipart upload size cap in bytes (`BODY_LIMIT_MB`, default 5 MB).
    pub body_limit_bytes: usize,
    /// CORS origin allow-list (`ALLOWED_ORIGINS`, comma-separated).
    pub allowed_origins: Vec<String>,
    /// Gradio space prediction endpoint (`CLASSIFIER_URL`).
    pub classifier_url: String,
    /// API key for the generative-language collaborator (`GEMINI_API_KEY`).
    pub gemini_api_key: String,
    /// MongoDB connection string built from `DB_USER`/`DB_PASSWORD`/`DB_HOST`,
    /// or `None` when no credentials are configured.
    pub mongo_uri: Option<String>,
}

/// Configuration parse failures (malformed numeric environment values).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number: {0}")]
    InvalidPort(String),

    #[error("BODY_LIMIT_MB must be a positive integer: {0}")]
    InvalidBodyLimit(String),
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT").unwrap_or_else(|_| "3001".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;

        let body_limit_mb = env::var("BODY_LIMIT_MB").unwrap_or_else(|_| "5".to_string());
        let body_limit_mb = body_limit_mb
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidBodyLimit(body_limit_mb.clone()))?;

        let allowed_origins = match env::var("ALLOWED_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => Self::default_allowed_origins(),
        };

        let classifier_url = env::var("CLASSIFIER_URL")
            .unwrap_or_else(|_| "https://diabeye-retinopathy.hf.space/run/predict".to_string());

        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();

        let mongo_uri = match (env::var("DB_USER"), env::var("DB_PASSWORD")) {
            (Ok(user), Ok(password)) => {
                let host = env::var("DB_HOST")
                    .unwrap_or_else(|_| "cluster0.b6ckjyi.mongodb.net".to_string());
                Some(format!(
                    "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName=Cluster0",
                    user, password, host
                ))
            }
            _ => None,
        };

        Ok(Config {
            port,
            body_limit_bytes: body_limit_mb * 1024 * 1024,
            allowed_origins,
            classifier_url,
            gemini_api_key,
            mongo_uri,
        })
    }

    /// The web origins the deployed client is served from.
    pub fn default_allowed_origins() -> Vec<String> {
        vec![
            "https://diabeye.vercel.app".to_string(),
            "http://localhost:5174".to_string(),
            "http://localhost:5173".to_string(),
        ]
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_splits_and_trims() {
        let origins = parse_origins("http://localhost:5173, https://diabeye.vercel.app ,");
        assert_eq!(
            origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://diabeye.vercel.app".to_string(),
            ]
        );
    }

    #[test]
    fn default_origins_nonempty() {
        assert!(!Config::default_allowed_origins().is_empty());
    }
}
