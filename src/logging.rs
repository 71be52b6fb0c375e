//! Diagnostic logging to stderr.
//!
//! User-facing progress goes to stdout; this is for `--verbose` runs and
//! `RUST_LOG` debugging only.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global subscriber. Later calls are no-ops.
///
/// * `verbose` - if true, log at `debug`; otherwise only warnings and errors
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let level = if verbose { "debug" } else { "warn" };
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();

        tracing::debug!("logging initialized, verbose={}", verbose);
    });
}
