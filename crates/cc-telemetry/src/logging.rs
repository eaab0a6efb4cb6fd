//! Global subscriber installation.
//!
//! Plain output is human readable. JSON output carries the same fields and
//! is meant for a log shipper.

use crate::{TelemetryConfig, TelemetryError};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// # Errors
/// * `InvalidFilter` - `config.log_level` is not a valid filter
/// * `AlreadyInitialized` - a global subscriber is already set; the existing
///   one stays in place
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::InvalidFilter {
            directives: config.log_level.clone(),
            reason: e.to_string(),
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|_| TelemetryError::AlreadyInitialized)?;

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Logging initialized"
    );
    Ok(())
}
