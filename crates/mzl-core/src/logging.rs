//! Tracing setup for native hosts and tests.
//!
//! Browser builds route `tracing` through the `log` facade instead; see the
//! Leptos crate.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "MZL_LOG";

/// Install a formatted subscriber filtered by `MZL_LOG`, or `default_filter`
/// when it is unset. A second call keeps the first subscriber.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));
    if tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init().is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
