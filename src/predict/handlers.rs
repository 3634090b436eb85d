use axum::{Json, extract::State};
use tracing::info;

use crate::{
    app_state::AppState,
    classifier::Verdict,
    features,
    predict::dtos::{PredictRequest, PredictResponse},
};

/// Classify one URL. Always answers 200: unreachable, malformed or
/// unclassifiable input degrades to a complete vector and, at worst, an
/// "UNCERTAIN" label -- never an error response.
#[utoipa::path(
    post,
    path = "/api/predict",
    tag = "predict",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Classification verdict", body = PredictResponse)
    )
)]
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<PredictRequest>,
) -> Json<PredictResponse> {
    info!(url = %payload.url, "Analyzing URL");

    let vector = features::extract(&payload.url).await;
    let prediction = state.model.predict(&vector);

    let (label, confidence, message) = match Verdict::from_prediction(&prediction) {
        Verdict::Phishing { confidence } => (
            "PHISHING",
            Some(confidence),
            format!("UNSAFE - {confidence:.1}% phishing risk"),
        ),
        Verdict::Legitimate { confidence } => (
            "LEGITIMATE",
            Some(confidence),
            format!("SAFE - {confidence:.1}% legitimate"),
        ),
        Verdict::Uncertain => (
            "UNCERTAIN",
            None,
            format!("Unable to classify (class: {})", prediction.class),
        ),
    };

    info!(label, "Classification complete");

    Json(PredictResponse {
        url: payload.url,
        label: label.to_string(),
        confidence,
        message,
        features: vector.as_slice().to_vec(),
    })
}
