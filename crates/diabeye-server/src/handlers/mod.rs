//! HTTP handler modules for the DiabEye gateway.
//!
//! Each sub-module implements thin handlers that extract the request, make
//! exactly one collaborator call, and map the result into the response
//! envelope. Failure conversion lives in [`crate::error::ApiError`]; handlers
//! only attach their route-fixed error string.

pub mod chat;
pub mod exercise;
pub mod liveness;
pub mod predict;
