//! Qdrant client configuration

use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for the Qdrant vector search client
#[derive(Debug, Clone, Deserialize)]
pub struct QdrantConfig {
    /// Base URL of the Qdrant REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Collection holding the policy snippet vectors
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Optional API key; local deployments commonly run unauthenticated
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:6333".to_string()
}

fn default_collection() -> String {
    "policies".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for QdrantConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl QdrantConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.collection.is_empty() {
            return Err("collection must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
