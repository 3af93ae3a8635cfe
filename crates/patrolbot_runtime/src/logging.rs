//! Logging setup.

use patrolbot_foundation::{Error, ErrorKind, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Output goes to stderr
/// so console replies on stdout stay clean.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| Error::new(ErrorKind::Config(format!("invalid log filter: {e}"))))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))
}
