use std::net::IpAddr;

use axum::http::StatusCode;
use test_utils::{get_json, test_router};

mod test_utils;

#[tokio::test]
async fn localhost_resolves_to_a_loopback_address() {
    let (status, body) = get_json(test_router(), "/dns-lookup?host=localhost").await;
    assert_eq!(status, StatusCode::OK);

    let addr: IpAddr = body["hostAddress"].as_str().unwrap().parse().unwrap();
    assert!(addr.is_loopback());
    assert!(!body["canonicalHostName"].as_str().unwrap().is_empty());
    assert_eq!(body["host"], "localhost");
}

#[tokio::test]
async fn unresolvable_host_is_a_client_error() {
    // .invalid is reserved and never resolves (RFC 2606)
    let (status, body) = get_json(test_router(), "/dns-lookup?host=does-not-exist.invalid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("DNS lookup failed: "));
}

#[tokio::test]
async fn success_envelope_carries_no_error_field() {
    let (_, body) = get_json(test_router(), "/dns-lookup?host=127.0.0.1").await;
    assert!(body.get("error").is_none());
    assert_eq!(body["hostAddress"], "127.0.0.1");
}
