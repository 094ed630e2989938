//! Port definitions for model collaborators
//!
//! Defines the traits (ports) that remote-model clients must implement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// A message in a chat-completion request (OpenAI-compatible format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request for a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Messages in the conversation
    pub messages: Vec<ChatMessage>,
    /// Whether to force a JSON-object response
    #[serde(default)]
    pub json_response: bool,
    /// Temperature override (engine default when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Max-token override (engine default when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a simple single-turn request
    pub fn simple(user_message: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: user_message.into(),
            }],
            json_response: false,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Create a request with a system prompt
    pub fn with_system(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.into(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.into(),
                },
            ],
            json_response: false,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Force a JSON-object response for this request
    pub const fn json_object(mut self) -> Self {
        self.json_response = true;
        self
    }

    /// Set temperature
    pub const fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// Response from a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated content
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Port for chat-completion engines
#[async_trait]
pub trait ChatEngine: Send + Sync {
    /// Generate a complete response
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, InferenceError>;

    /// Check if the provider is reachable
    async fn is_healthy(&self) -> bool;

    /// Get the configured model name
    fn model(&self) -> &str;
}

/// Port for embedding engines
#[async_trait]
pub trait EmbeddingEngine: Send + Sync {
    /// Generate an embedding for a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>, InferenceError>;

    /// Generate embeddings for multiple texts in a batch
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, InferenceError>;

    /// Get the model name
    fn model(&self) -> &str;

    /// Get the embedding dimensions
    fn dimensions(&self) -> usize;
}
