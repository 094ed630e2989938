//! Confidence score value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A confidence score, guaranteed to lie within the closed [0, 1] interval
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Confidence(f32);

impl Confidence {
    /// Create a new confidence score
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfidence` if the value is NaN or
    /// outside 0.0..=1.0.
    pub fn new(value: f32) -> Result<Self, DomainError> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(DomainError::InvalidConfidence(value));
        }
        Ok(Self(value))
    }

    /// Get the underlying score
    pub const fn value(&self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for Confidence {
    type Error = DomainError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f32 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
