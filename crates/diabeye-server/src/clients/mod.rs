//! External collaborator clients.
//!
//! Each sub-module wraps one network collaborator behind an object-safe trait
//! so handlers hold `Arc<dyn ...>` handles and tests substitute doubles
//! without touching the network.

pub mod classifier;
pub mod datastore;
pub mod gemini;

/// Failures from a collaborator call.
///
/// Handlers never inspect the variant: every `ClientError` becomes the
/// route's 500 envelope with this error's message as `details`.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure reaching the collaborator.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The collaborator answered with a non-success status.
    #[error("{0}")]
    Upstream(String),

    /// The collaborator's reply did not match the expected shape.
    #[error("response parse failed: {0}")]
    Parse(String),
}
