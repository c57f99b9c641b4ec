use std::time::Duration;

use crate::config::ServiceConfig;
use crate::errors::DiagnosticsError;
use crate::exec;
use crate::model::CommandCapture;
use crate::validate;

/// Trace the path to a host with the platform `traceroute` utility.
///
/// The raw text is the contract; nothing is parsed out of it.
pub async fn probe(
    config: &ServiceConfig,
    host: &str,
) -> Result<CommandCapture, DiagnosticsError> {
    validate::host(host)?;

    let deadline = Duration::from_millis(config.traceroute_deadline_ms);
    exec::run("traceroute", &[host], deadline).await
}
