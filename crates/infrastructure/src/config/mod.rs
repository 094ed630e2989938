//! Application configuration
//!
//! Layered loading: built-in defaults, then an optional `palisade.toml`,
//! then `PALISADE__*` environment overrides (double underscore separates
//! nesting, e.g. `PALISADE__SAFETY__MAX_TEXT_CHARS=800`).

mod safety;

use std::path::Path;

use ai_core::{EmbeddingConfig, InferenceConfig};
use application::ApplicationError;
use integration_qdrant::QdrantConfig;
use serde::Deserialize;
use tracing::debug;

pub use safety::SafetyConfig;

use crate::telemetry::TelemetryConfig;

/// Default configuration file name, looked up in the working directory
const DEFAULT_CONFIG_FILE: &str = "palisade";

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "PALISADE";

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Guardrail gate and retrieval bounds
    #[serde(default)]
    pub safety: SafetyConfig,

    /// Classification-stage model provider
    #[serde(default = "InferenceConfig::openai_classifier")]
    pub classifier: InferenceConfig,

    /// Compliance-stage model provider
    #[serde(default = "InferenceConfig::groq_compliance")]
    pub compliance: InferenceConfig,

    /// Embedding provider used to vectorize retrieval queries
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Vector store holding the policy snippet index
    #[serde(default)]
    pub vector_store: QdrantConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            safety: SafetyConfig::default(),
            classifier: InferenceConfig::openai_classifier(),
            compliance: InferenceConfig::groq_compliance(),
            embedding: EmbeddingConfig::default(),
            vector_store: QdrantConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default file location and environment
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(None::<&Path>)
    }

    /// Load configuration from an explicit file (optional) and environment
    pub fn load_from(path: Option<impl AsRef<Path>>) -> Result<Self, ApplicationError> {
        let mut builder = config::Config::builder();

        builder = match path {
            Some(path) => builder.add_source(
                config::File::from(path.as_ref()).required(true),
            ),
            None => builder.add_source(
                config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
            ),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        let app_config: Self = settings
            .try_deserialize()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        app_config.validate()?;

        debug!(
            max_text_chars = app_config.safety.max_text_chars,
            top_k = app_config.safety.retrieval_top_k,
            classifier_model = %app_config.classifier.model,
            compliance_model = %app_config.compliance.model,
            "Configuration loaded"
        );

        Ok(app_config)
    }

    /// Validate the combined configuration
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.safety
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("safety: {e}")))?;
        self.vector_store
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("vector_store: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_config_uses_documented_providers() {
        let config = AppConfig::default();
        assert_eq!(config.classifier.base_url, "https://api.openai.com/v1");
        assert_eq!(config.compliance.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.vector_store.collection, "policies");
    }

    #[test]
    fn load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
[safety]
max_text_chars = 800
retrieval_top_k = 2

[classifier]
model = "gpt-4o"
api_key = "sk-from-file"
"#
        )
        .unwrap();

        let config = AppConfig::load_from(Some(file.path())).unwrap();

        assert_eq!(config.safety.max_text_chars, 800);
        assert_eq!(config.safety.retrieval_top_k, 2);
        assert_eq!(config.classifier.model, "gpt-4o");
        assert!(config.classifier.api_key.is_some());
        // Untouched sections keep their defaults.
        assert_eq!(config.safety.rate_limit_max_requests, 20);
        assert_eq!(config.compliance.model, "llama-3.1-8b-instant");
    }

    #[test]
    fn invalid_file_settings_rejected() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
[safety]
retrieval_top_k = 0
"#
        )
        .unwrap();

        let result = AppConfig::load_from(Some(file.path()));
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn missing_explicit_file_rejected() {
        let result = AppConfig::load_from(Some("/nonexistent/palisade.toml"));
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }
}
