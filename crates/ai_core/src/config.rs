//! Configuration for chat-completion engines

use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for a chat-completion engine
///
/// Both the classifier and the compliance collaborator are described by this
/// shape; they differ only in provider URL, model, and credential.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the OpenAI-compatible API (up to and including `/v1`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// API credential; required at engine construction
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Temperature for sampling (0.0 for deterministic structured output)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_temperature() -> f32 {
    0.0
}

const fn default_max_tokens() -> u32 {
    512
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl InferenceConfig {
    /// Default configuration for the classification stage (OpenAI)
    pub fn openai_classifier() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            ..Default::default()
        }
    }

    /// Default configuration for the compliance stage (Groq's
    /// OpenAI-compatible endpoint)
    pub fn groq_compliance() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            ..Default::default()
        }
    }

    /// Set the API credential
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }
}
