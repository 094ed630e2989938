//! Compliance port - Interface for the policy judgment collaborator

use async_trait::async_trait;
use domain::{ComplianceDecision, RetrievedPolicy};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the final policy judgment
///
/// Grounding the reasons in the retrieved policy identifiers is a quality
/// goal of the remote capability, not a checked invariant.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompliancePort: Send + Sync {
    /// Decide the moderation outcome for `text` given its category and the
    /// retrieved policy snippets
    async fn decide(
        &self,
        text: &str,
        category: &str,
        policies: &[RetrievedPolicy],
    ) -> Result<ComplianceDecision, ApplicationError>;
}
