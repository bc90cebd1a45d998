//! Image-classification collaborator (hosted Gradio space).
//!
//! The gateway does not run the retinopathy model itself. It posts the
//! uploaded image to the space's prediction endpoint as a base64 data URI and
//! reads back a list of (label, confidence) pairs.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::ClientError;

/// One class label with its confidence in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub confidence: f64,
}

/// Object-safe seam over the image-classification collaborator.
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    /// Classifies one uploaded image. `mime` is the declared upload MIME type.
    async fn classify(&self, image: &[u8], mime: &str) -> Result<Vec<LabelScore>, ClientError>;
}

/// Production classifier backed by a Gradio space prediction endpoint.
pub struct GradioClassifier {
    endpoint: String,
    http: reqwest::Client,
}

impl GradioClassifier {
    pub fn new(endpoint: String) -> Self {
        GradioClassifier {
            endpoint,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ImageClassifier for GradioClassifier {
    async fn classify(&self, image: &[u8], mime: &str) -> Result<Vec<LabelScore>, ClientError> {
        let data_uri = format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(image));

        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "data": [data_uri] }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Upstream(format!(
                "classifier request failed ({}): {}",
                status, body
            )));
        }

        let parsed: GradioPredictResponse = serde_json::from_str(&body)
            .map_err(|err| ClientError::Parse(err.to_string()))?;
        let output = parsed
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::Parse("classifier response carried no output".to_string()))?;

        parse_label_scores(output)
    }
}

#[derive(Debug, Deserialize)]
struct GradioPredictResponse {
    data: Vec<serde_json::Value>,
}

/// Extracts the (label, confidence) list from one Gradio output value.
///
/// Gradio's `Label` component nests the list under `confidences`; a plain
/// JSON endpoint returns the list directly. Both shapes are accepted.
fn parse_label_scores(output: serde_json::Value) -> Result<Vec<LabelScore>, ClientError> {
    let list = match output.get("confidences") {
        Some(confidences) => confidences.clone(),
        None => output,
    };
    serde_json::from_value(list).map_err(|err| ClientError::Parse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_gradio_label_component_output() {
        let output = json!({
            "label": "No DR",
            "confidences": [
                { "label": "No DR", "confidence": 0.91 },
                { "label": "Mild", "confidence": 0.09 },
            ],
        });
        let scores = parse_label_scores(output).unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].label, "No DR");
        assert!((scores[0].confidence - 0.91).abs() < 1e-12);
    }

    #[test]
    fn parses_bare_score_list() {
        let output = json!([{ "label": "Severe", "confidence": 1.0 }]);
        let scores = parse_label_scores(output).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].label, "Severe");
    }

    #[test]
    fn rejects_malformed_output() {
        let err = parse_label_scores(json!("not a list")).unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }
}
