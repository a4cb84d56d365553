//! Process-wide `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the process-wide `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `env_filter` when it is set. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn setup(env_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).compact().try_init();
}
