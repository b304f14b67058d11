//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging output.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name stamped on every log line.
    pub service_name: String,

    /// Component identifier (01-03, 00 for the whole process).
    pub component_id: String,

    /// Log level filter (trace, debug, info, warn, error).
    pub log_level: String,

    /// Whether to emit JSON formatted logs.
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "civic-ledger".to_string(),
            component_id: "00".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CL_SERVICE_NAME`: Service name (default: civic-ledger)
    /// - `CL_COMPONENT_ID`: Component ID (default: 00)
    /// - `CL_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `CL_JSON_LOGS`: Enable JSON logs (default: false, true in containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("CL_SERVICE_NAME").unwrap_or_else(|_| "civic-ledger".to_string()),

            component_id: env::var("CL_COMPONENT_ID").unwrap_or_else(|_| "00".to_string()),

            log_level: env::var("CL_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("CL_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),
        }
    }

    /// Create configuration for a specific component.
    pub fn for_component(component_id: &str, component_name: &str) -> Self {
        let mut config = Self::from_env();
        config.component_id = component_id.to_string();
        config.service_name = format!("cl-{component_id}-{component_name}");
        config
    }

    /// Get the full service name including the component.
    #[must_use]
    pub fn full_service_name(&self) -> String {
        if self.component_id == "00" {
            self.service_name.clone()
        } else {
            format!("{}-{}", self.service_name, self.component_id)
        }
    }
}
