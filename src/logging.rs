use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SVC_LOG";

/// Initialize logging to stderr
///
/// Uses the `SVC_LOG` environment variable if set, otherwise falls back to
/// `default_level` (e.g. "warn", "svc=debug"). Stdout stays reserved for
/// command output.
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init()
        .ok();
}
