//! The four diagnostic probes.
//!
//! Each probe validates its own input, so the HTTP layer can delegate
//! without pre-checking, and each returns a typed outcome from `model`.

pub mod dns;
pub mod ping;
pub mod scan;
pub mod traceroute;
