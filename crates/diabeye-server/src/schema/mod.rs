//! API schema types for request/response definitions.
//!
//! Chat has no typed request or response here: its body is forwarded as
//! opaque conversational context and the collaborator's structured reply is
//! returned verbatim.

pub mod exercise;
pub mod predict;
