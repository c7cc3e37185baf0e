//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for structured logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full
    /// `EnvFilter` directive
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to format logs as JSON
    pub json_logs: bool,

    /// Network identifier (lisk-sepolia, lisk-mainnet, local)
    pub network: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "lisk-garden".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            network: "lisk-sepolia".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OTEL_SERVICE_NAME`: Service name (default: lisk-garden)
    /// - `LG_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `LG_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `LG_JSON_LOGS`: Enable JSON logs (default: false, true in containers)
    /// - `LG_NETWORK`: Network name (default: lisk-sepolia)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let is_container =
            lookup("KUBERNETES_SERVICE_HOST").is_some() || lookup("DOCKER_CONTAINER").is_some();

        Self {
            service_name: lookup("OTEL_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("LG_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            console_output: lookup("LG_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.console_output),

            json_logs: lookup("LG_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),

            network: lookup("LG_NETWORK").unwrap_or(defaults.network),
        }
    }

    /// Configuration for one tool, e.g. `garden-watch`.
    pub fn for_tool(tool_name: &str) -> Self {
        let mut config = Self::from_env();
        config.service_name = format!("lisk-garden-{}", tool_name);
        config
    }
}
