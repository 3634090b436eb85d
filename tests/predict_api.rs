use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use phishguard::{
    app,
    app_state::AppState,
    classifier::{LEGITIMATE_CLASS, LogisticModel, ModelParams, PHISHING_CLASS},
    features::FEATURE_COUNT,
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app_with(params: ModelParams) -> axum::Router {
    let model = LogisticModel::from_params(params).expect("valid test model");
    app(AppState::new(model))
}

fn test_app() -> axum::Router {
    // Uniform negative weights: suspicious (-1) features push toward the
    // phishing class, matching the shipped model's sign convention.
    test_app_with(ModelParams {
        classes: [LEGITIMATE_CLASS, PHISHING_CLASS],
        weights: vec![-0.5; FEATURE_COUNT],
        intercept: 0.0,
    })
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn predict_request(url: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "url": url }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn healthz_reports_model() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["model"], "loaded");
    assert_eq!(body["feature_count"], FEATURE_COUNT as u64);
}

#[tokio::test]
async fn predict_answers_for_unparseable_url() {
    // No fetch happens for text that is not a URL; this stays offline.
    let response = test_app().oneshot(predict_request("not a url")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["label"], "LEGITIMATE");
    assert!(body["confidence"].as_f64().unwrap() > 50.0);
    assert_eq!(body["features"].as_array().unwrap().len(), FEATURE_COUNT);
    assert_eq!(
        body["features"][FEATURE_COUNT - 1],
        "not a url".chars().count() as i64
    );
}

#[tokio::test]
async fn predict_answers_for_unreachable_url() {
    let response = test_app()
        .oneshot(predict_request("http://127.0.0.1:1/unreachable"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(matches!(
        body["label"].as_str().unwrap(),
        "LEGITIMATE" | "PHISHING"
    ));
    assert_eq!(body["features"].as_array().unwrap().len(), FEATURE_COUNT);
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["paths"]["/api/predict"]["post"].is_object());
    assert!(body["paths"]["/healthz"]["get"].is_object());
    assert!(body["components"]["schemas"]["PredictResponse"].is_object());
}

#[tokio::test]
async fn unrecognized_model_class_maps_to_uncertain() {
    let app = test_app_with(ModelParams {
        classes: [7, 9],
        weights: vec![0.0; FEATURE_COUNT],
        intercept: 0.0,
    });

    let response = app.oneshot(predict_request("not a url")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["label"], "UNCERTAIN");
    assert!(body["confidence"].is_null());
}
