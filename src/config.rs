/// Configuration settings for the diagnostics probes
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Timeout in milliseconds for each TCP connection attempt during a port scan
    pub connect_timeout_ms: u64,

    /// Maximum number of concurrent connection attempts during a port scan
    pub max_concurrent_connects: usize,

    /// Widest allowed port span (toPort - fromPort) for a single scan request
    pub max_port_span: i64,

    /// Overall deadline in milliseconds for one `ping` invocation
    pub ping_deadline_ms: u64,

    /// Overall deadline in milliseconds for one `traceroute` invocation
    pub traceroute_deadline_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 200,
            max_concurrent_connects: 64,
            max_port_span: 2000,
            // iputils ping gives up on a silent host after ~10s; the deadline
            // must sit above that so the tool's exit code is what we report
            ping_deadline_ms: 15_000,
            traceroute_deadline_ms: 30_000,
        }
    }
}

impl ServiceConfig {
    /// Set the maximum number of concurrent connection attempts
    pub fn set_concurrency(&mut self, jobs: usize) {
        self.max_concurrent_connects = jobs.max(1);
    }
}
