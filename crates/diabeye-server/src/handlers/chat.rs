//! `POST /api/chat` — conversational assistant.
//!
//! The entire JSON body (the client sends at least a `message` field) is
//! forwarded as conversational context. The collaborator is constrained to a
//! fixed output schema and its parsed reply is returned to the client
//! verbatim.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::clients::gemini::SamplingOptions;
use crate::error::ApiError;
use crate::state::AppState;

/// Fixed error string for every processing failure on this route.
pub const CHAT_FAILURE: &str = "Failed to process chat message";

/// Default sampling for conversational replies.
pub const CHAT_SAMPLING: SamplingOptions = SamplingOptions {
    temperature: 0.7,
    top_p: 0.95,
    top_k: 40,
    max_output_tokens: 1024,
};

pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let prompt = chat_prompt(&body);
    let reply = state
        .model
        .generate_json(&prompt, &CHAT_SAMPLING, chat_schema())
        .await
        .map_err(|err| ApiError::upstream(CHAT_FAILURE, err))?;
    Ok(Json(reply))
}

fn chat_prompt(body: &Value) -> String {
    format!(
        "You are DiabEye's assistant for diabetic eye-health questions. \
         Reply to the conversation below with a short helpful message, a list \
         of follow-up suggestions, and an ISO-8601 timestamp.\n\n\
         Conversation:\n{}",
        body
    )
}

/// Output schema: a message string, suggestion strings, a timestamp string.
fn chat_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "message": { "type": "string" },
            "suggestions": {
                "type": "array",
                "items": { "type": "string" },
            },
            "timestamp": { "type": "string" },
        },
        "required": ["message", "suggestions", "timestamp"],
    })
}
