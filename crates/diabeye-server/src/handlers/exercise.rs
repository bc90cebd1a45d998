//! `POST /api/exercise-suggestions` — personalized exercise plan.
//!
//! Builds a structured prompt from the client's profile fields and asks the
//! generative collaborator for a fixed count of distinct exercises. Sampling
//! temperature is deliberately higher than the chat route so plans vary
//! between requests.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::clients::gemini::SamplingOptions;
use crate::error::ApiError;
use crate::schema::exercise::ExerciseRequest;
use crate::state::AppState;

/// Fixed error string for every processing failure on this route.
pub const EXERCISE_FAILURE: &str = "Failed to generate exercise suggestions";

/// Number of distinct exercises requested per plan.
pub const EXERCISE_COUNT: usize = 5;

/// Higher-temperature sampling than [`crate::handlers::chat::CHAT_SAMPLING`].
pub const EXERCISE_SAMPLING: SamplingOptions = SamplingOptions {
    temperature: 1.0,
    top_p: 0.95,
    top_k: 64,
    max_output_tokens: 2048,
};

pub async fn exercise_suggestions(
    State(state): State<AppState>,
    Json(req): Json<ExerciseRequest>,
) -> Result<Json<Value>, ApiError> {
    let prompt = exercise_prompt(&req);
    let reply = state
        .model
        .generate_json(&prompt, &EXERCISE_SAMPLING, exercise_schema())
        .await
        .map_err(|err| ApiError::upstream(EXERCISE_FAILURE, err))?;
    Ok(Json(reply))
}

fn exercise_prompt(req: &ExerciseRequest) -> String {
    format!(
        "Suggest exactly {} distinct exercises suitable for a person managing \
         diabetes.\nName: {}\nAge: {}\nWeight: {} kg\nPreferred exercise \
         type: {}\nSession duration: {} minutes\n\nFor each exercise give the \
         exercise name, its duration in minutes, and the calories burned.",
        EXERCISE_COUNT, req.name, req.age, req.weight, req.exercises_type, req.session_duration
    )
}

/// Output schema: a fixed-length list of exercise objects.
fn exercise_schema() -> Value {
    json!({
        "type": "array",
        "minItems": EXERCISE_COUNT,
        "maxItems": EXERCISE_COUNT,
        "items": {
            "type": "object",
            "properties": {
                "exerciseName": { "type": "string" },
                "durationMinutes": { "type": "number" },
                "caloriesBurned": { "type": "number" },
            },
            "required": ["exerciseName", "durationMinutes", "caloriesBurned"],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::chat::CHAT_SAMPLING;

    fn request() -> ExerciseRequest {
        serde_json::from_value(json!({
            "Name": "Rahim",
            "Age": 55,
            "weight": 82.0,
            "exercisesType": "walking",
            "sessionDuration": 45,
        }))
        .unwrap()
    }

    #[test]
    fn prompt_carries_profile_and_count() {
        let prompt = exercise_prompt(&request());
        assert!(prompt.contains("exactly 5 distinct exercises"));
        assert!(prompt.contains("Rahim"));
        assert!(prompt.contains("82 kg"));
        assert!(prompt.contains("45 minutes"));
    }

    #[test]
    fn schema_pins_the_exercise_count() {
        let schema = exercise_schema();
        assert_eq!(schema["minItems"], json!(EXERCISE_COUNT));
        assert_eq!(schema["maxItems"], json!(EXERCISE_COUNT));
    }

    #[test]
    fn samples_hotter_than_chat() {
        assert!(EXERCISE_SAMPLING.temperature > CHAT_SAMPLING.temperature);
    }
}
