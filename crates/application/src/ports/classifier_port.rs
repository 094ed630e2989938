//! Classifier port - Interface for the text-classification collaborator

use async_trait::async_trait;
use domain::Classification;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the first-stage content classifier
///
/// The remote capability owns the category vocabulary; the pipeline only
/// branches on the `needs_review` flag it returns.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClassifierPort: Send + Sync {
    /// Classify a piece of text
    async fn classify(&self, text: &str) -> Result<Classification, ApplicationError>;
}
