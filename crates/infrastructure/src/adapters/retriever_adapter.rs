//! Retriever adapter - Embedding + vector search implementation of the
//! retriever port
//!
//! Vectorizes the query through the embedding engine, searches the policy
//! collection, and translates the stored payloads into domain entities.

use std::sync::Arc;

use ai_core::EmbeddingEngine;
use application::{ApplicationError, CollaboratorStage, RetrieverPort};
use async_trait::async_trait;
use domain::{PolicyId, RetrievedPolicy};
use integration_qdrant::{ScoredPoint, VectorSearchClient};
use tracing::{debug, instrument};

/// Retriever collaborator composed of an embedding engine and a vector
/// search client
pub struct RetrieverAdapter {
    embedding: Arc<dyn EmbeddingEngine>,
    search: Arc<dyn VectorSearchClient>,
    top_k: usize,
}

impl std::fmt::Debug for RetrieverAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetrieverAdapter")
            .field("embedding_model", &self.embedding.model())
            .field("top_k", &self.top_k)
            .finish_non_exhaustive()
    }
}

impl RetrieverAdapter {
    /// Create a new retriever adapter
    pub fn new(
        embedding: Arc<dyn EmbeddingEngine>,
        search: Arc<dyn VectorSearchClient>,
        top_k: usize,
    ) -> Self {
        Self {
            embedding,
            search,
            top_k,
        }
    }

    /// Build the retrieval query, enriched with the category when known
    fn build_query(text: &str, category: Option<&str>) -> String {
        match category {
            Some(category) if !category.is_empty() => {
                format!("Category: {category}\nContent: {text}")
            }
            _ => text.to_string(),
        }
    }

    fn convert_hit(hit: ScoredPoint) -> Result<RetrievedPolicy, ApplicationError> {
        let severity = hit.payload.severity.parse().map_err(|e: domain::DomainError| {
            ApplicationError::collaborator(
                CollaboratorStage::Retriever,
                format!("stored payload invalid: {e}"),
            )
        })?;

        Ok(RetrievedPolicy {
            policy_id: PolicyId::new(hit.payload.policy_id),
            title: hit.payload.title,
            category: hit.payload.category,
            severity,
            snippet: hit.payload.snippet,
            score: hit.score,
        })
    }
}

#[async_trait]
impl RetrieverPort for RetrieverAdapter {
    #[instrument(skip(self, text), fields(top_k = self.top_k, category = ?category))]
    async fn retrieve(
        &self,
        text: &str,
        category: Option<String>,
    ) -> Result<Vec<RetrievedPolicy>, ApplicationError> {
        let query = Self::build_query(text, category.as_deref());

        let vector = self.embedding.embed(&query).await.map_err(|e| {
            ApplicationError::collaborator(CollaboratorStage::Retriever, e.to_string())
        })?;

        let filter = category.as_deref().filter(|c| !c.is_empty());
        let hits = self
            .search
            .search(vector, self.top_k, filter)
            .await
            .map_err(|e| {
                ApplicationError::collaborator(CollaboratorStage::Retriever, e.to_string())
            })?;

        debug!(hits = hits.len(), "Vector search returned");

        // The backend's relevance order is authoritative; convert in place.
        hits.into_iter().map(Self::convert_hit).collect()
    }
}
