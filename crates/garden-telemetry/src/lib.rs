//! # Garden Telemetry
//!
//! Structured logging bootstrap shared by LiskGarden client tools.
//!
//! Libraries only emit `tracing` events; binaries call [`init_telemetry`]
//! once at startup.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use garden_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_telemetry(TelemetryConfig::for_tool("garden-watch"))?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `lisk-garden` | Service name on every line |
//! | `LG_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `LG_JSON_LOGS` | `false` | JSON lines instead of pretty output |
//! | `LG_CONSOLE_OUTPUT` | `true` | Write logs to stdout at all |
//! | `LG_NETWORK` | `lisk-sepolia` | Network label |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    /// Log filter directive could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Install the global subscriber.
///
/// Returns a guard to hold for the lifetime of the program.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    logging::init_logging(&config)?;

    tracing::info!(
        service = %config.service_name,
        network = %config.network,
        json = config.json_logs,
        "Telemetry initialized"
    );

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that marks the telemetry lifetime. Drop on shutdown.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry...");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TelemetryError::Config("bad directive".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: bad directive");
    }
}
