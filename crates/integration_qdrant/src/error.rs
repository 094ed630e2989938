//! Vector search error types

use thiserror::Error;

/// Errors that can occur during vector search operations
#[derive(Debug, Error)]
pub enum VectorSearchError {
    /// Connection to the vector store failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the vector store failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response from the vector store
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The configured collection does not exist
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// The vector store returned a server error
    #[error("Server error: {0}")]
    ServerError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl VectorSearchError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::ServerError(_)
                | Self::Timeout { .. }
        )
    }
}

impl From<reqwest::Error> for VectorSearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs: 10 }
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
