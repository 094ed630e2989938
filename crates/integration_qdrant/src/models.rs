//! Vector search data models
//!
//! Typed representations of the policy snippet payloads stored in the
//! Qdrant collection by the ingestion process.

use serde::{Deserialize, Serialize};

/// Payload stored alongside each policy snippet vector
///
/// `severity` stays a plain string at this boundary; translating it into
/// the domain vocabulary (and rejecting unknown ranks) happens in the
/// retriever adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyPayload {
    /// Identifier of the source policy document
    pub policy_id: String,
    /// Human-readable policy title
    pub title: String,
    /// Moderation category the policy belongs to
    pub category: String,
    /// Severity rank as stored by the ingestion process
    pub severity: String,
    /// The stored text fragment
    pub snippet: String,
}

/// A single scored search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPoint {
    /// Relevance score as reported by Qdrant (higher is more relevant)
    pub score: f32,
    /// The stored payload
    pub payload: PolicyPayload,
}
