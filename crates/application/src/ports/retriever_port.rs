//! Retriever port - Interface for the policy similarity-search collaborator

use async_trait::async_trait;
use domain::RetrievedPolicy;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for retrieving policy snippets by similarity to the input
///
/// Returns at most the configured top-K snippets, in the backend's
/// relevance order. The order is authoritative and must be passed through
/// unmodified.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RetrieverPort: Send + Sync {
    /// Retrieve policy snippets relevant to `text`
    ///
    /// When the category is known it both enriches the query and narrows
    /// the corpus searched.
    async fn retrieve(
        &self,
        text: &str,
        category: Option<String>,
    ) -> Result<Vec<RetrievedPolicy>, ApplicationError>;
}
