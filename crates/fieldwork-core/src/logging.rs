//! Logging integration for the fieldwork workspace.
//!
//! Provides a helper for configuring [`tracing_subscriber`]-based logging.
//! Library crates only emit `tracing` events; installing a subscriber is the
//! application's job, typically once at startup.

/// Sets up the global tracing subscriber.
///
/// `filter` is an `EnvFilter` directive string (e.g. "debug",
/// "fieldwork_forms=trace"); an invalid directive falls back to "info".
/// With `pretty` a human-readable format is used; otherwise a structured
/// JSON format suited to log aggregation.
///
/// Installation is best-effort: if a subscriber is already set (common in
/// tests), the call is a no-op.
pub fn setup_logging(filter: &str, pretty: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if pretty {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}
