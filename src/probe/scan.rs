use std::io;
use std::net::IpAddr;
use std::time::Duration;

use futures::pin_mut;
use futures::stream::{self, StreamExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::errors::DiagnosticsError;
use crate::model::{ConnectOutcome, ScanOutcome};
use crate::probe::dns;
use crate::validate;

/// Classify one TCP connection attempt against `(addr, port)`.
///
/// A completed connect is closed again immediately; everything else maps to
/// a non-open variant so the caller can collapse or distinguish as needed.
async fn connect_outcome(addr: IpAddr, port: u16, connect_timeout: Duration) -> ConnectOutcome {
    match timeout(connect_timeout, TcpStream::connect((addr, port))).await {
        Ok(Ok(stream)) => {
            drop(stream);
            ConnectOutcome::Open
        }
        Ok(Err(e)) if e.kind() == io::ErrorKind::ConnectionRefused => ConnectOutcome::Refused,
        Ok(Err(_)) => ConnectOutcome::Other,
        Err(_) => ConnectOutcome::TimedOut,
    }
}

/// Scan every port in the inclusive range with bounded concurrency.
///
/// The two result sequences always cover the full range, are disjoint, and
/// come back sorted ascending no matter in which order connects complete.
pub async fn probe(
    config: &ServiceConfig,
    host: &str,
    from_port: i64,
    to_port: i64,
) -> Result<ScanOutcome, DiagnosticsError> {
    validate::host(host)?;
    validate::port_range(from_port, to_port, config.max_port_span)?;

    // resolution is a precondition here, not the probe's stated purpose, so
    // its failure surfaces as a probe failure rather than a DNS error
    let addrs = dns::resolve(host)
        .await
        .map_err(|e| DiagnosticsError::Probe(e.to_string()))?;
    let addr = addrs
        .first()
        .copied()
        .ok_or_else(|| DiagnosticsError::Probe(format!("no addresses found for {host}")))?;

    let (from, to) = (from_port as u16, to_port as u16);
    let connect_timeout = Duration::from_millis(config.connect_timeout_ms);
    debug!(host, %addr, from, to, jobs = config.max_concurrent_connects, "scanning");

    let outcomes = stream::iter(from..=to)
        .map(|port| async move { (port, connect_outcome(addr, port, connect_timeout).await) })
        .buffer_unordered(config.max_concurrent_connects);
    pin_mut!(outcomes);

    let mut open_ports = Vec::new();
    let mut closed_ports = Vec::new();
    while let Some((port, outcome)) = outcomes.next().await {
        if outcome.is_open() {
            open_ports.push(port);
        } else {
            closed_ports.push(port);
        }
    }

    // completion order is arbitrary under buffer_unordered
    open_ports.sort();
    closed_ports.sort();

    Ok(ScanOutcome {
        resolved_address: addr.to_string(),
        open_ports,
        closed_ports,
    })
}
