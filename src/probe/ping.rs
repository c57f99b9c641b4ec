use std::time::Duration;

use crate::config::ServiceConfig;
use crate::errors::DiagnosticsError;
use crate::exec;
use crate::model::PingOutcome;
use crate::validate;

/// Send a single ICMP echo request through the platform `ping` utility.
///
/// A nonzero exit code is a negative finding, not a failure: the probe
/// succeeds and reports `reachable = false`.
pub async fn probe(config: &ServiceConfig, host: &str) -> Result<PingOutcome, DiagnosticsError> {
    validate::host(host)?;

    let deadline = Duration::from_millis(config.ping_deadline_ms);
    let capture = exec::run("ping", &["-c", "1", host], deadline).await?;
    let latency_ms = extract_latency_ms(&capture.output);

    Ok(PingOutcome {
        exit_code: capture.exit_code,
        reachable: capture.exit_code == 0,
        latency_ms,
        raw_output: capture.output,
    })
}

/// Pull the round-trip time out of ping output.
///
/// Takes the substring between the first `time=` marker and the next ` ms`,
/// trimmed. The value stays a string: ping's formatting varies across
/// platforms and the field is informational, not authoritative.
pub fn extract_latency_ms(output: &str) -> Option<String> {
    let start = output.find("time=")?;
    let rest = &output[start + "time=".len()..];
    let end = rest.find(" ms")?;
    Some(rest[..end].trim().to_string())
}
