// Logging init: `tracing` fmt subscriber on stderr, filtered by `RUST_LOG`
// or the level picked on the command line.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber. Call once, before building a client.
pub fn init_logging(default_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
