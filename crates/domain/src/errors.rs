//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Confidence score outside the closed [0, 1] interval
    #[error("Invalid confidence score: {0} (must be within 0.0..=1.0)")]
    InvalidConfidence(f32),

    /// Moderation label not one of the enumerated values
    #[error("Invalid moderation label: {0}")]
    InvalidLabel(String),

    /// Severity rank not one of the enumerated values
    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),

    /// A decision must carry at least one reason
    #[error("Decision reasons must not be empty")]
    EmptyReasons,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
