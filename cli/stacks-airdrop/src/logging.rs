use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize diagnostics on standard error.
///
/// The filter is taken from `AIRDROP_LOG`, then `RUST_LOG`, defaulting to
/// `warn`. Operator reports go to standard output and are not affected.
///
/// Examples:
/// - `AIRDROP_LOG=debug` - per-stage filter counts
/// - `AIRDROP_LOG=stacks_airdrop::filter=debug` - filter stages only
pub fn init_logging() {
    let filter = env::var("AIRDROP_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    let env_filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false)
        .compact();

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    tracing::debug!(log_filter = %filter, "logging initialized");
}
