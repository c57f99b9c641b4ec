use thiserror::Error;

/// Error types for the diagnostics probes
///
/// The `Display` strings double as the wire-level `error` messages, so the
/// wording here is part of the HTTP contract.
#[derive(Error, Debug)]
pub enum DiagnosticsError {
    #[error("Host is required")]
    HostMissing,

    #[error("Invalid host")]
    HostInvalid,

    #[error("Invalid port range")]
    PortRangeInvalid,

    #[error("Port range too large (max 2000 ports for this endpoint)")]
    PortRangeTooLarge,

    #[error("DNS lookup failed: {0}")]
    DnsLookup(String),

    #[error("Exception: {0}")]
    Probe(String),
}

impl DiagnosticsError {
    /// True for errors caused by the request itself rather than a probe failure
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Probe(_))
    }
}
