//! Response types for `POST /api/predict`.

use serde::Serialize;

use crate::metrics::HealthMetrics;

/// The `prediction` payload of a successful classification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionView {
    /// Argmax-confidence class label from the classifier.
    pub class: String,
    /// Percentage-formatted confidence, e.g. `"87.3%"`.
    pub confidence: String,
    /// Placeholder metrics, regenerated per request.
    #[serde(flatten)]
    pub metrics: HealthMetrics,
}
