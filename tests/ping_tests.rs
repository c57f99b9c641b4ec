use axum::http::StatusCode;
use netdiag::probe::ping::extract_latency_ms;
use test_utils::{get_json, test_router};

mod test_utils;

#[test]
fn latency_is_extracted_from_ping_output() {
    let out = "64 bytes from 127.0.0.1: icmp_seq=1 ttl=64 time=12.3 ms\n";
    assert_eq!(extract_latency_ms(out), Some("12.3".to_string()));
}

#[test]
fn latency_handles_sub_millisecond_times() {
    let out = "64 bytes from ::1: icmp_seq=1 ttl=64 time=0.045 ms\n";
    assert_eq!(extract_latency_ms(out), Some("0.045".to_string()));
}

#[test]
fn first_marker_wins() {
    let out = "time=1.1 ms\ntime=2.2 ms\n";
    assert_eq!(extract_latency_ms(out), Some("1.1".to_string()));
}

#[test]
fn latency_is_none_without_marker() {
    let out = "1 packets transmitted, 0 received, 100% packet loss\n";
    assert_eq!(extract_latency_ms(out), None);
}

#[test]
fn latency_is_none_without_ms_suffix() {
    assert_eq!(extract_latency_ms("time=12.3"), None);
}

#[tokio::test]
async fn error_envelope_carries_no_success_fields() {
    let (status, body) = get_json(test_router(), "/ping?host=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(body.get("exitCode").is_none());
    assert!(body.get("rawOutput").is_none());
    assert!(body.get("reachable").is_none());
}
