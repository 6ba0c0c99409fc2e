//! Integration tests for hueprint-ps API endpoints
//!
//! Tests cover:
//! - Health endpoint
//! - Option catalog endpoint
//! - Parameter mapping endpoint (success, validation errors, malformed JSON)

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use hueprint_ps::{build_router, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: Create app with the standard option catalog
fn setup_app() -> axum::Router {
    build_router(AppState::default())
}

/// Test helper: Create GET request
fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Create JSON POST request
fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let response = setup_app().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "hueprint-ps");
    assert!(body["version"].is_string());
}

// =============================================================================
// Option Catalog Tests
// =============================================================================

#[tokio::test]
async fn test_options_endpoint() {
    let response = setup_app().oneshot(get_request("/api/options")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["intents"].as_array().unwrap().len(), 5);
    assert_eq!(body["perspectives"]["poolSize"], 21);
    assert_eq!(body["tones"]["poolSize"], 8);
    assert_eq!(body["topics"]["poolSize"], 20);
    assert!(body["perspectives"].get("pool_size").is_none());
    assert_eq!(body["tones"]["options"][0], "Warm");
}

// =============================================================================
// Parameter Mapping Tests
// =============================================================================

#[tokio::test]
async fn test_map_params_exploration_baseline() {
    let request = post_json("/api/params", &json!({ "intent": "Exploration", "seed": 42 }));
    let response = setup_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["seed"], 42.0);
    assert_eq!(body["textureWeights"], json!([0.35, 0.25, 0.2, 0.2]));
    assert_eq!(body["motionWeights"], json!([0.5, 0.2, 0.15, 0.15]));
    assert_eq!(body["extraCount"], 0);
    assert!(body["paletteA"].is_array());
}

#[tokio::test]
async fn test_map_params_selections() {
    let request = post_json(
        "/api/params",
        &json!({
            "intent": "Connection",
            "perspectiveSelections": ["Career", "Stress"],
            "toneSelections": ["Warm", "Quirky"],
            "topicSelections": ["Books"],
            "accentColor": null,
            "seed": null
        }),
    );
    let response = setup_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["textureWeights"], json!([0.5, 0.0, 0.0, 0.5]));
    assert_eq!(body["motionWeights"], json!([0.5, 0.0, 0.0, 0.5]));
    assert_eq!(body["extraCount"], 2);
    assert_eq!(body["extraColors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_map_params_is_deterministic() {
    let input = json!({ "intent": "Focus", "topicSelections": ["Tarot", "Yoga"] });

    let first = setup_app().oneshot(post_json("/api/params", &input)).await.unwrap();
    let second = setup_app().oneshot(post_json("/api/params", &input)).await.unwrap();

    let a = extract_json(first.into_body()).await;
    let b = extract_json(second.into_body()).await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_map_params_unknown_intent_is_not_an_error() {
    let request = post_json("/api/params", &json!({ "intent": "Unknown Value" }));
    let response = setup_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_map_params_rejects_out_of_range_accent() {
    let request = post_json(
        "/api/params",
        &json!({ "intent": "Focus", "accentColor": [0.5, 1.2, 0.0] }),
    );
    let response = setup_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("accentColor"));
}

#[tokio::test]
async fn test_map_params_empty_accent_is_absent() {
    let empty = json!({ "intent": "Focus", "accentColor": [], "seed": 3 });
    let plain = json!({ "intent": "Focus", "seed": 3 });

    let response = setup_app().oneshot(post_json("/api/params", &empty)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let a = extract_json(response.into_body()).await;

    let response = setup_app().oneshot(post_json("/api/params", &plain)).await.unwrap();
    let b = extract_json(response.into_body()).await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_map_params_rejects_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/params")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"intent\": "))
        .unwrap();
    let response = setup_app().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_map_params_requires_post() {
    let response = setup_app().oneshot(get_request("/api/params")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
