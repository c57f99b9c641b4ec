use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::errors::DiagnosticsError;
use crate::model::{self, DnsReport, ErrorReport, PingReport, PortScanReport, TracerouteReport};
use crate::probe;

#[derive(Clone)]
struct AppState {
    config: Arc<ServiceConfig>,
}

/// Build the diagnostics router.
pub fn router(config: ServiceConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };
    Router::new()
        .route("/ping", get(ping))
        .route("/dns-lookup", get(dns_lookup))
        .route("/traceroute", get(traceroute))
        .route("/port-scan", get(port_scan))
        .with_state(state)
}

/// Query shape shared by the host-only endpoints.
///
/// `host` is optional at the decode layer so a missing parameter reaches
/// the validator and comes back as "Host is required" inside the envelope.
#[derive(Debug, Deserialize)]
struct HostQuery {
    host: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScanQuery {
    host: Option<String>,
    from_port: Option<i64>,
    to_port: Option<i64>,
}

fn failure(
    host: String,
    ports: (Option<i64>, Option<i64>),
    timestamp: String,
    err: DiagnosticsError,
) -> Response {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    let report = ErrorReport {
        host,
        from_port: ports.0,
        to_port: ports.1,
        timestamp,
        error: err.to_string(),
    };
    (status, Json(report)).into_response()
}

async fn ping(State(state): State<AppState>, Query(query): Query<HostQuery>) -> Response {
    let host = query.host.unwrap_or_default();
    let timestamp = model::timestamp();
    debug!(host = %host, "ping requested");

    match probe::ping::probe(&state.config, &host).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(PingReport {
                host,
                timestamp,
                exit_code: outcome.exit_code,
                raw_output: outcome.raw_output,
                reachable: outcome.reachable,
                latency_ms: outcome.latency_ms,
            }),
        )
            .into_response(),
        Err(err) => failure(host, (None, None), timestamp, err),
    }
}

async fn dns_lookup(State(_state): State<AppState>, Query(query): Query<HostQuery>) -> Response {
    let host = query.host.unwrap_or_default();
    let timestamp = model::timestamp();
    debug!(host = %host, "dns lookup requested");

    match probe::dns::probe(&host).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(DnsReport {
                host,
                timestamp,
                host_address: outcome.host_address,
                canonical_host_name: outcome.canonical_host_name,
            }),
        )
            .into_response(),
        Err(err) => failure(host, (None, None), timestamp, err),
    }
}

async fn traceroute(State(state): State<AppState>, Query(query): Query<HostQuery>) -> Response {
    let host = query.host.unwrap_or_default();
    let timestamp = model::timestamp();
    debug!(host = %host, "traceroute requested");

    match probe::traceroute::probe(&state.config, &host).await {
        Ok(capture) => (
            StatusCode::OK,
            Json(TracerouteReport {
                host,
                timestamp,
                exit_code: capture.exit_code,
                raw_output: capture.output,
            }),
        )
            .into_response(),
        Err(err) => failure(host, (None, None), timestamp, err),
    }
}

async fn port_scan(State(state): State<AppState>, Query(query): Query<ScanQuery>) -> Response {
    let host = query.host.unwrap_or_default();
    let timestamp = model::timestamp();
    let (from_port, to_port) = (query.from_port, query.to_port);
    debug!(host = %host, ?from_port, ?to_port, "port scan requested");

    // absent range parameters fail validation inside the probe
    let result = probe::scan::probe(
        &state.config,
        &host,
        from_port.unwrap_or(0),
        to_port.unwrap_or(0),
    )
    .await;

    match result {
        Ok(outcome) => (
            StatusCode::OK,
            Json(PortScanReport {
                host,
                from_port: from_port.unwrap_or(0) as u16,
                to_port: to_port.unwrap_or(0) as u16,
                timestamp,
                resolved_address: outcome.resolved_address,
                open_ports: outcome.open_ports,
                closed_ports: outcome.closed_ports,
            }),
        )
            .into_response(),
        Err(err) => failure(host, (from_port, to_port), timestamp, err),
    }
}
