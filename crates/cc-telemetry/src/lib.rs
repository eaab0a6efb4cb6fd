//! # Cold-Chain Telemetry
//!
//! Structured logging for the certificate registry.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cc_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` / `CC_SERVICE_NAME` | `cold-chain-registry` | Service name in logs |
//! | `CC_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter directives |
//! | `CC_JSON_LOGS` | `false` (`true` in containers) | JSON formatted output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Global tracing subscriber already initialized")]
    AlreadyInitialized,

    #[error("Invalid log filter '{directives}': {reason}")]
    InvalidFilter { directives: String, reason: String },
}
