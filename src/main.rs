use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use netdiag::{router, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let raw_args: Vec<String> = std::env::args().collect();
    let mut args = raw_args.iter().skip(1);

    let mut listen = "127.0.0.1:8080".to_string();
    let mut jobs = None;

    // Parse command line arguments
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--listen" | "-l" => {
                listen = args
                    .next()
                    .cloned()
                    .context("--listen requires an address")?;
            }
            "--jobs" | "-j" => jobs = args.next().and_then(|s| s.parse().ok()),
            "--help" | "-h" => {
                println!("Usage: netdiag [OPTIONS]");
                println!("Options:");
                println!("  -l, --listen <ADDR>  bind address (default: 127.0.0.1:8080)");
                println!("  -j, --jobs <N>       concurrent port-scan connects (default: 64)");
                println!("  -h, --help           show this help message");
                return Ok(());
            }
            other => anyhow::bail!("unrecognized argument: {other}"),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = ServiceConfig::default();
    if let Some(j) = jobs {
        config.set_concurrency(j);
    }

    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .with_context(|| format!("failed to bind {listen}"))?;
    info!(addr = %listen, "netdiag listening");

    axum::serve(listener, router(config))
        .await
        .context("server error")?;
    Ok(())
}
