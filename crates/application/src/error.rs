//! Application-level errors

use std::fmt;

use domain::DomainError;
use thiserror::Error;

/// Pipeline stage a collaborator failure originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaboratorStage {
    Classifier,
    Retriever,
    Compliance,
}

impl fmt::Display for CollaboratorStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classifier => write!(f, "classifier"),
            Self::Retriever => write!(f, "retriever"),
            Self::Compliance => write!(f, "compliance"),
        }
    }
}

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Bad or missing input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Input text exceeds the configured maximum length
    #[error("Text too long, max {max_chars} characters")]
    PayloadTooLarge { max_chars: usize },

    /// Missing or invalid access token
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    /// Client exceeded the sliding-window rate limit
    #[error("Rate limit exceeded, try again in {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },

    /// A remote collaborator call failed
    #[error("Collaborator failure in {stage} stage: {message}")]
    Collaborator {
        stage: CollaboratorStage,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a collaborator failure for the given stage
    pub fn collaborator(stage: CollaboratorStage, msg: impl Into<String>) -> Self {
        Self::Collaborator {
            stage,
            message: msg.into(),
        }
    }

    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::Collaborator { .. }
        )
    }
}
