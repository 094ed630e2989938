//! OpenAI-compatible embeddings client
//!
//! Vectorizes retrieval queries through the `/embeddings` endpoint of an
//! OpenAI-compatible provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::InferenceError;
use crate::ports::EmbeddingEngine;

/// Configuration for the embedding engine
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingConfig {
    /// Base URL of the OpenAI-compatible API (up to and including `/v1`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Embedding model to use
    #[serde(default = "default_embedding_model")]
    pub model: String,

    /// API credential; required at engine construction
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Number of embedding dimensions (for validation)
    #[serde(default = "default_dimensions")]
    pub dimensions: usize,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-3-small".to_string()
}

const fn default_timeout_ms() -> u64 {
    15000 // 15 seconds
}

const fn default_dimensions() -> usize {
    1536 // text-embedding-3-small dimensions
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_embedding_model(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
            dimensions: default_dimensions(),
        }
    }
}

impl EmbeddingConfig {
    /// Set the API credential
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }
}

/// Embedding engine for OpenAI-compatible providers
pub struct OpenAiEmbeddingEngine {
    client: Client,
    config: EmbeddingConfig,
    api_key: SecretString,
}

impl std::fmt::Debug for OpenAiEmbeddingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiEmbeddingEngine")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .field("dimensions", &self.config.dimensions)
            .finish_non_exhaustive()
    }
}

impl OpenAiEmbeddingEngine {
    /// Create a new embedding engine
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::MissingCredential` when no API key is
    /// configured.
    pub fn new(config: EmbeddingConfig) -> Result<Self, InferenceError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            InferenceError::MissingCredential(format!(
                "api_key for {} is not configured",
                config.base_url
            ))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            dimensions = config.dimensions,
            "Initialized embedding engine"
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Build the API URL for the embeddings endpoint
    fn embed_url(&self) -> String {
        format!("{}/embeddings", self.config.base_url.trim_end_matches('/'))
    }

    async fn request_embeddings(&self, input: EmbedInput) -> Result<Vec<Vec<f32>>, InferenceError> {
        let request = OpenAiEmbedRequest {
            model: self.config.model.clone(),
            input,
        };

        let response = self
            .client
            .post(self.embed_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Embedding request failed");
            return Err(InferenceError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let result: OpenAiEmbedResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let mut data = result.data;
        // Pairing with the input texts relies on the index field, not on
        // response ordering.
        data.sort_by_key(|d| d.index);

        Ok(data.into_iter().map(|d| d.embedding).collect())
    }
}

/// OpenAI embed request format
#[derive(Debug, Serialize)]
struct OpenAiEmbedRequest {
    model: String,
    input: EmbedInput,
}

/// Input for embed request - single text or batch
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum EmbedInput {
    Single(String),
    Batch(Vec<String>),
}

/// OpenAI embed response format
#[derive(Debug, Deserialize)]
struct OpenAiEmbedResponse {
    data: Vec<OpenAiEmbedding>,
}

#[derive(Debug, Deserialize)]
struct OpenAiEmbedding {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

#[async_trait]
impl EmbeddingEngine for OpenAiEmbeddingEngine {
    #[instrument(skip(self, text), fields(model = %self.config.model, text_len = text.len()))]
    async fn embed(&self, text: &str) -> Result<Vec<f32>, InferenceError> {
        debug!("Sending embed request");

        let mut embeddings = self
            .request_embeddings(EmbedInput::Single(text.to_string()))
            .await?;

        if embeddings.is_empty() {
            return Err(InferenceError::InvalidResponse(
                "no embedding in response".to_string(),
            ));
        }

        let embedding = embeddings.swap_remove(0);
        debug!(dimensions = embedding.len(), "Received embedding");

        Ok(embedding)
    }

    #[instrument(skip(self, texts), fields(model = %self.config.model, batch_size = texts.len()))]
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, InferenceError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Sending batch embed request");

        let embeddings = self
            .request_embeddings(EmbedInput::Batch(texts.to_vec()))
            .await?;

        if embeddings.len() != texts.len() {
            warn!(
                expected = texts.len(),
                got = embeddings.len(),
                "Mismatch in batch embedding count"
            );
        }

        Ok(embeddings)
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EmbeddingConfig::default();
        assert_eq!(config.model, "text-embedding-3-small");
        assert_eq!(config.dimensions, 1536);
        assert_eq!(config.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn missing_api_key_fails_construction() {
        let result = OpenAiEmbeddingEngine::new(EmbeddingConfig::default());
        assert!(matches!(result, Err(InferenceError::MissingCredential(_))));
    }

    #[test]
    fn embed_url_construction() {
        let config = EmbeddingConfig {
            base_url: "http://example.com:8080/v1".to_string(),
            ..Default::default()
        }
        .with_api_key("sk-test");
        let engine = OpenAiEmbeddingEngine::new(config).unwrap();
        assert_eq!(engine.embed_url(), "http://example.com:8080/v1/embeddings");
    }

    #[test]
    fn dimensions_reported_from_config() {
        let config = EmbeddingConfig {
            dimensions: 384,
            ..Default::default()
        }
        .with_api_key("sk-test");
        let engine = OpenAiEmbeddingEngine::new(config).unwrap();
        assert_eq!(engine.dimensions(), 384);
    }
}
