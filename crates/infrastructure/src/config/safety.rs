//! Guardrail and retrieval safety configuration

use application::{GuardrailConfig, RateLimiterConfig};
use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for the guardrail gate and retrieval bounds
#[derive(Debug, Clone, Deserialize)]
pub struct SafetyConfig {
    /// Maximum accepted text length in characters
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,

    /// Maximum requests per client within the window
    #[serde(default = "default_rate_limit_max_requests")]
    pub rate_limit_max_requests: u32,

    /// Sliding-window length in seconds
    #[serde(default = "default_rate_limit_window_seconds")]
    pub rate_limit_window_seconds: u64,

    /// Optional demo token; when set, required on every request
    #[serde(default)]
    pub demo_token: Option<SecretString>,

    /// Maximum number of policy snippets retrieved per request
    #[serde(default = "default_retrieval_top_k")]
    pub retrieval_top_k: usize,
}

const fn default_max_text_chars() -> usize {
    1200
}

const fn default_rate_limit_max_requests() -> u32 {
    20
}

const fn default_rate_limit_window_seconds() -> u64 {
    60
}

const fn default_retrieval_top_k() -> usize {
    4
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            max_text_chars: default_max_text_chars(),
            rate_limit_max_requests: default_rate_limit_max_requests(),
            rate_limit_window_seconds: default_rate_limit_window_seconds(),
            demo_token: None,
            retrieval_top_k: default_retrieval_top_k(),
        }
    }
}

impl SafetyConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_chars == 0 {
            return Err("max_text_chars must be greater than 0".to_string());
        }

        if self.rate_limit_max_requests == 0 {
            return Err("rate_limit_max_requests must be greater than 0".to_string());
        }

        if self.rate_limit_window_seconds == 0 {
            return Err("rate_limit_window_seconds must be greater than 0".to_string());
        }

        if self.retrieval_top_k == 0 {
            return Err("retrieval_top_k must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Derive the guardrail gate configuration
    #[must_use]
    pub fn guardrail_config(&self) -> GuardrailConfig {
        GuardrailConfig {
            max_text_chars: self.max_text_chars,
            rate_limit: RateLimiterConfig {
                max_requests: self.rate_limit_max_requests,
                window_secs: self.rate_limit_window_seconds,
            },
            access_token: self.demo_token.clone(),
        }
    }
}
