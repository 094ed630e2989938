//! Moderation decision entities

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{Confidence, ModerationLabel};

/// Verdict produced by the compliance stage (or synthesized by the
/// short-circuit path)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceDecision {
    /// Final moderation outcome
    pub label: ModerationLabel,
    /// How certain the decision is
    pub confidence: Confidence,
    /// Ordered, human-readable justifications
    pub reasons: Vec<String>,
}

impl ComplianceDecision {
    /// Create a compliance decision
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyReasons` if no reasons are given.
    pub fn new(
        label: ModerationLabel,
        confidence: Confidence,
        reasons: Vec<String>,
    ) -> Result<Self, DomainError> {
        if reasons.is_empty() {
            return Err(DomainError::EmptyReasons);
        }
        Ok(Self {
            label,
            confidence,
            reasons,
        })
    }
}

/// Final decision attached to a reviewed content item
///
/// Same shape as `ComplianceDecision` plus the category established during
/// classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDecision {
    /// Final moderation outcome
    pub label: ModerationLabel,
    /// How certain the decision is
    pub confidence: Confidence,
    /// Category established by the classification stage
    pub category: String,
    /// Ordered, human-readable justifications
    pub reasons: Vec<String>,
}

impl PolicyDecision {
    /// Combine a compliance verdict with the classified category
    pub fn from_compliance(category: impl Into<String>, decision: ComplianceDecision) -> Self {
        Self {
            label: decision.label,
            confidence: decision.confidence,
            category: category.into(),
            reasons: decision.reasons,
        }
    }
}

/// The single entity returned to the caller: content identifier plus the
/// final decision. Derived per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Identifier of the reviewed content item
    pub content_id: String,
    /// Final moderation decision
    pub decision: PolicyDecision,
}

impl AnalysisResult {
    /// Create an analysis result
    pub fn new(content_id: impl Into<String>, decision: PolicyDecision) -> Self {
        Self {
            content_id: content_id.into(),
            decision,
        }
    }
}
