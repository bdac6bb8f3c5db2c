//! Logging setup
//!
//! Logs go to stderr so that stdout carries only demonstration output.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive for a run
///
/// `-v` selects `debug` and `-vv` (or more) selects `trace`. Without a flag
/// `RUST_LOG` is used if set, then the configured level.
pub fn filter_directive(configured: &str, verbose: u8, rust_log: Option<&str>) -> String {
    match (verbose, rust_log) {
        (0, Some(env)) if !env.trim().is_empty() => env.to_string(),
        (0, _) => configured.to_string(),
        (1, _) => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Parse a filter directive, describing what was wrong with it
pub fn build_filter(directive: &str) -> Result<EnvFilter, String> {
    EnvFilter::try_new(directive)
        .map_err(|e| format!("Invalid log filter '{}': {}", directive, e))
}

/// Install the global `tracing` subscriber
///
/// The subscriber is always installed. If the chosen directive does not
/// parse, `warn` is used instead and the parse error is returned so the
/// caller can report it.
pub fn init(configured: &str, verbose: u8) -> Result<(), String> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(configured, verbose, rust_log.as_deref());
    let (filter, result) = match build_filter(&directive) {
        Ok(filter) => (filter, Ok(())),
        Err(e) => (EnvFilter::new("warn"), Err(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    result
}
