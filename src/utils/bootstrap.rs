//! Startup helpers for the ecopoint binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LOG_ENV_VAR;

/// Initialize tracing with the ECOPOINT_LOG environment variable.
///
/// Falls back to `default_filter` (normally `logging.filter` from the
/// configuration) when ECOPOINT_LOG is unset or unparsable. Log lines go to
/// stderr so they never interleave with the menu on stdout.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter))
}
