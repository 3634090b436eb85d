pub mod app_state;
pub mod classifier;
pub mod config;
pub mod features;
pub mod fetcher;
pub mod health;
pub mod predict;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::app_state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, predict::handlers::predict),
    components(schemas(
        health::HealthResponse,
        predict::dtos::PredictRequest,
        predict::dtos::PredictResponse
    )),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "predict", description = "URL classification")
    )
)]
pub struct ApiDoc;

/// Assemble the application router. Shared between the binary and the
/// route-level tests.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::health_check))
        .route("/api/predict", post(predict::predict))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
