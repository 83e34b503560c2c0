use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic filter, e.g. `debug`.
pub const LOG_ENV: &str = "SISO_FIXTURE_LOG";

/// Install the diagnostic subscriber.
///
/// Diagnostics go to stderr; stdout is reserved for the tools' own output.
/// Calling this more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
