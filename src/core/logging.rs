//! Tracing setup. Logs go to stderr so stdout stays clean for JSON output.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "sleeper_ffl=warn";

pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. If one is already installed it is kept and
/// this call only logs that at debug level.
pub fn init_logging() {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref());

    let result = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(err) = result {
        tracing::debug!(%err, "keeping existing tracing subscriber");
    }
}
