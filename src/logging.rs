use std::io;

use tracing_subscriber::EnvFilter;

/// Logs go to stderr only; stdout is reserved for the yaml-error message.
pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
