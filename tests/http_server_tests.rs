//! HTTP surface integration tests
//!
//! Routing, health, and gateway-error mapping for the proxy endpoints. The
//! registry base URL points at a refusing port so proxy calls fail fast
//! through the retry path.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;

use docnorm::config::{AppConfig, RegistryConfig, RetryPolicy};
use docnorm::{build_router, AppState};

fn test_state() -> AppState {
    let config = AppConfig {
        listen_port: 0,
        candidate_name: "test-candidate".to_string(),
        registry: RegistryConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            candidate_id: "cand-test".to_string(),
            retry: RetryPolicy {
                max_attempts: 2,
                base_delay: Duration::from_millis(1),
                request_timeout: Duration::from_secs(1),
                overall_deadline: Duration::from_secs(5),
            },
        },
    };
    AppState::new(config).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_router(test_state());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["module"], json!("docnorm"));
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = build_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_fetch_maps_registry_failure_to_bad_gateway() {
    let app = build_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/fetch?batch=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], json!("BAD_GATEWAY"));
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("/api/data"), "message names the path: {}", message);
    assert!(message.contains("2"), "message names the attempt count: {}", message);
}

#[tokio::test]
async fn test_submit_maps_registry_failure_to_bad_gateway() {
    let app = build_router(test_state());

    let payload = json!({
        "batch_id": "1",
        "cleaned_items": []
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/submit")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], json!("BAD_GATEWAY"));
}

#[tokio::test]
async fn test_fetch_requires_get() {
    let app = build_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/fetch")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
