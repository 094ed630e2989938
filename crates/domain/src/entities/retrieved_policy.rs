//! Retrieved policy snippet entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{PolicyId, Severity};

/// A policy snippet returned by similarity search
///
/// Ordering within a result list is authoritative; the absolute score is
/// backend-defined and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedPolicy {
    /// Identifier of the source policy document
    pub policy_id: PolicyId,
    /// Human-readable policy title
    pub title: String,
    /// Moderation category the policy belongs to
    pub category: String,
    /// Severity rank of the policy
    pub severity: Severity,
    /// The retrieved text fragment
    pub snippet: String,
    /// Relevance score as reported by the search backend
    pub score: f32,
}

impl RetrievedPolicy {
    /// Format as a compact one-block reference for model prompts
    pub fn format_reference(&self) -> String {
        format!(
            "[{}] {} (cat={}, severity={})\n{}",
            self.policy_id, self.title, self.category, self.severity, self.snippet
        )
    }
}
