//! Classification entity

use serde::{Deserialize, Serialize};

/// Result of the first-stage content classification
///
/// The pipeline branches only on `needs_review`; the category vocabulary
/// is owned by the classifier model, not hard-coded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// High-level category ("benign", "harassment", "self-harm", ...)
    pub category: String,
    /// Whether a detailed policy review is required
    pub needs_review: bool,
    /// Short free-text rationale from the classifier
    pub explanation: String,
}

impl Classification {
    /// Create a classification result
    pub fn new(
        category: impl Into<String>,
        needs_review: bool,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            needs_review,
            explanation: explanation.into(),
        }
    }
}
