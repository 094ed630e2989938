//! Logging and tracing initialization
//!
//! Structured logging via `tracing-subscriber` with an env-filter; the
//! `RUST_LOG` variable overrides the configured filter when present.

use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

/// Configuration for logging output
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Log filter directive (e.g. "info", "palisade=debug,reqwest=warn")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON-formatted log lines instead of human-readable ones
    #[serde(default)]
    pub json_output: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json_output: false,
        }
    }
}

/// Initialize the global tracing subscriber
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json_output {
        builder.json().finish().try_init()
    } else {
        builder.finish().try_init()
    };

    result.map_err(|e| e.to_string())?;

    info!(json = config.json_output, "Telemetry initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_filter, "info");
        assert!(!config.json_output);
    }

    #[test]
    fn deserialization_with_defaults() {
        let config: TelemetryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn deserialization_reads_fields() {
        let config: TelemetryConfig =
            serde_json::from_str(r#"{"log_filter":"debug","json_output":true}"#).unwrap();
        assert_eq!(config.log_filter, "debug");
        assert!(config.json_output);
    }
}
