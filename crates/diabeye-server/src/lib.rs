//! HTTP gateway for the DiabEye diabetic-retinopathy screening web client.
//!
//! The gateway exposes a small fixed route set: an uploaded retinal image is
//! forwarded to an external image-classification collaborator, chat and
//! exercise-suggestion requests are delegated to an external
//! generative-language collaborator, and every result or failure is mapped
//! onto a fixed JSON envelope. No domain state is kept between requests.

pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod schema;
pub mod state;
