//! `POST /api/predict` — retinal image classification.
//!
//! The request must carry exactly one multipart file part named `image`; its
//! absence is the gateway's single client-input error (400). The bytes and
//! declared MIME type are handed to the classification collaborator, and the
//! argmax-confidence label plus fresh placeholder metrics are returned.

use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::json;

use crate::clients::classifier::LabelScore;
use crate::error::ApiError;
use crate::metrics;
use crate::schema::predict::PredictionView;
use crate::state::AppState;

/// Fixed error string for every processing failure on this route.
pub const PREDICT_FAILURE: &str = "Failed to process the image";

const UPLOAD_FIELD: &str = "image";
const DEFAULT_MIME: &str = "application/octet-stream";

pub async fn predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut upload: Option<(Vec<u8>, String)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::upstream(PREDICT_FAILURE, err))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let mime = field
                .content_type()
                .unwrap_or(DEFAULT_MIME)
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|err| ApiError::upstream(PREDICT_FAILURE, err))?;
            upload = Some((bytes.to_vec(), mime));
            break;
        }
    }
    let (image, mime) = upload.ok_or(ApiError::MissingImage)?;

    let scores = state
        .classifier
        .classify(&image, &mime)
        .await
        .map_err(|err| ApiError::upstream(PREDICT_FAILURE, err))?;
    let top = top_label(&scores)
        .ok_or_else(|| ApiError::upstream(PREDICT_FAILURE, "classifier returned no labels"))?;

    let prediction = PredictionView {
        class: top.label.clone(),
        confidence: format_confidence(top.confidence),
        metrics: metrics::sample(),
    };
    Ok(Json(json!({ "success": true, "prediction": prediction })))
}

/// Stable left-to-right argmax: on ties the first occurrence wins.
fn top_label(scores: &[LabelScore]) -> Option<&LabelScore> {
    scores
        .iter()
        .reduce(|best, score| if score.confidence > best.confidence { score } else { best })
}

/// Renders a confidence in [0, 1] as a percentage with one decimal place,
/// half-up (0.8734 renders as "87.3%").
fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", (confidence * 1000.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(label: &str, confidence: f64) -> LabelScore {
        LabelScore {
            label: label.to_string(),
            confidence,
        }
    }

    #[test]
    fn argmax_prefers_first_on_tie() {
        let scores = vec![score("A", 0.5), score("B", 0.5)];
        assert_eq!(top_label(&scores).unwrap().label, "A");
    }

    #[test]
    fn argmax_scans_whole_list() {
        let scores = vec![score("A", 0.1), score("B", 0.7), score("C", 0.2)];
        assert_eq!(top_label(&scores).unwrap().label, "B");
    }

    #[test]
    fn argmax_of_empty_list_is_none() {
        assert!(top_label(&[]).is_none());
    }

    #[test]
    fn confidence_formats_with_one_decimal() {
        assert_eq!(format_confidence(0.8734), "87.3%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
        assert_eq!(format_confidence(0.005), "0.5%");
    }
}
