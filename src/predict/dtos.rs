use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PredictRequest {
    /// The URL to classify. Any text is accepted; malformed URLs still
    /// produce a verdict.
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PredictResponse {
    pub url: String,
    /// "PHISHING", "LEGITIMATE" or "UNCERTAIN".
    pub label: String,
    /// Percentage confidence in the winning class; absent when uncertain.
    pub confidence: Option<f64>,
    pub message: String,
    /// The extracted feature vector, in model order.
    pub features: Vec<i64>,
}
