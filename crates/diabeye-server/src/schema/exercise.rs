//! Request types for `POST /api/exercise-suggestions`.
//!
//! Field casing mirrors what the web client already sends (`Name`, `Age`,
//! `weight`, `exercisesType`, `sessionDuration`).

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseRequest {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: u32,
    pub weight: f64,
    #[serde(rename = "exercisesType")]
    pub exercises_type: String,
    #[serde(rename = "sessionDuration")]
    pub session_duration: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_client_casing() {
        let req: ExerciseRequest = serde_json::from_value(serde_json::json!({
            "Name": "Ayesha",
            "Age": 42,
            "weight": 68.5,
            "exercisesType": "cardio",
            "sessionDuration": 30,
        }))
        .unwrap();
        assert_eq!(req.name, "Ayesha");
        assert_eq!(req.age, 42);
        assert_eq!(req.exercises_type, "cardio");
        assert_eq!(req.session_duration, 30);
    }
}
