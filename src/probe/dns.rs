use std::io;
use std::net::IpAddr;

use tokio::task;
use tracing::debug;

use crate::errors::DiagnosticsError;
use crate::model::LookupOutcome;
use crate::validate;

/// Forward-resolve a host name to its addresses.
///
/// getaddrinfo blocks, so the call runs on the blocking pool.
pub(crate) async fn resolve(host: &str) -> io::Result<Vec<IpAddr>> {
    let name = host.to_string();
    let addrs = task::spawn_blocking(move || dns_lookup::lookup_host(&name))
        .await
        .map_err(io::Error::other)??;
    Ok(addrs)
}

/// Reverse-resolve an address, best effort.
async fn reverse(addr: IpAddr) -> Option<String> {
    task::spawn_blocking(move || dns_lookup::lookup_addr(&addr).ok())
        .await
        .ok()
        .flatten()
}

/// Look up a host: first forward address plus its canonical name.
///
/// The canonical name comes from a reverse lookup on the first address and
/// falls back to the address literal when no PTR record answers, matching
/// what the platform resolver reports.
pub async fn probe(host: &str) -> Result<LookupOutcome, DiagnosticsError> {
    validate::host(host)?;

    let addrs = resolve(host)
        .await
        .map_err(|e| DiagnosticsError::DnsLookup(e.to_string()))?;
    let first = addrs
        .first()
        .copied()
        .ok_or_else(|| DiagnosticsError::DnsLookup(format!("no addresses found for {host}")))?;

    let host_address = first.to_string();
    let canonical_host_name = reverse(first).await.unwrap_or_else(|| host_address.clone());
    debug!(host, address = %host_address, "resolved");

    Ok(LookupOutcome {
        host_address,
        canonical_host_name,
    })
}
