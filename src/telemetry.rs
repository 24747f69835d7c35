//! Tracing subscriber setup for registrar binaries.

use tracing_subscriber::{EnvFilter, fmt};

/// Fallback directive when the configured filter does not parse.
const FALLBACK_FILTER: &str = "info";

/// Builds the filter for `directive`, falling back to `info` when it is not
/// a valid filter expression.
#[must_use]
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Installs the global compact `fmt` subscriber.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init(directive: &str) -> bool {
    fmt()
        .with_env_filter(env_filter(directive))
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}
