use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Captured output of one external command invocation
#[derive(Debug, Clone)]
pub struct CommandCapture {
    /// Process exit code, -1 when the process was terminated by a signal
    pub exit_code: i32,
    /// stdout with stderr appended, lossily decoded
    pub output: String,
}

/// Result of a single TCP connection attempt during a port scan
///
/// Only `Open` reaches the wire; the other variants all collapse into the
/// closed bucket but stay distinct here so the scanner can log and future
/// callers can tell refused from filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Open,
    Refused,
    TimedOut,
    Other,
}

impl ConnectOutcome {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Outcome of one ping probe
#[derive(Debug, Clone)]
pub struct PingOutcome {
    pub exit_code: i32,
    pub raw_output: String,
    pub reachable: bool,
    pub latency_ms: Option<String>,
}

/// Outcome of one forward/reverse DNS lookup
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub host_address: String,
    pub canonical_host_name: String,
}

/// Outcome of one port scan
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub resolved_address: String,
    pub open_ports: Vec<u16>,
    pub closed_ports: Vec<u16>,
}

/// ISO-8601 UTC timestamp stamped at request entry
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `/ping` success envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PingReport {
    pub host: String,
    pub timestamp: String,
    pub exit_code: i32,
    pub raw_output: String,
    pub reachable: bool,
    /// Informational only; serialized as null when the marker is absent
    pub latency_ms: Option<String>,
}

/// `/dns-lookup` success envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsReport {
    pub host: String,
    pub timestamp: String,
    pub host_address: String,
    pub canonical_host_name: String,
}

/// `/traceroute` success envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracerouteReport {
    pub host: String,
    pub timestamp: String,
    pub exit_code: i32,
    pub raw_output: String,
}

/// `/port-scan` success envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortScanReport {
    pub host: String,
    pub from_port: u16,
    pub to_port: u16,
    pub timestamp: String,
    pub resolved_address: String,
    pub open_ports: Vec<u16>,
    pub closed_ports: Vec<u16>,
}

/// Failure envelope shared by all endpoints
///
/// The port range echo is only present on `/port-scan` responses, and only
/// for the parameters the caller actually supplied.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i64>,
    pub timestamp: String,
    pub error: String,
}
