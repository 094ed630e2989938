//! Inference errors

use thiserror::Error;

/// Errors that can occur when talking to a remote model
#[derive(Debug, Error)]
pub enum InferenceError {
    /// No API credential configured for a provider that requires one
    #[error("Missing API credential: {0}")]
    MissingCredential(String),

    /// Failed to connect to the model provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the model provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body did not match the expected schema
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Provider-side rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Provider returned a server error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl InferenceError {
    /// Whether retrying the same request later could succeed
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout(_) | Self::RateLimited | Self::ServerError(_)
        )
    }
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
