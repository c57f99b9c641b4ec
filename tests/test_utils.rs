use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use netdiag::{router, ServiceConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Build a router backed by the default probe configuration
#[allow(dead_code)]
pub fn test_router() -> Router {
    router(test_config())
}

/// Probe configuration suitable for tests: same behavior, fewer workers
#[allow(dead_code)]
pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        max_concurrent_connects: 16,
        ..ServiceConfig::default()
    }
}

/// Drive one GET request through the router and decode the JSON body
#[allow(dead_code)]
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}
