//! Qdrant REST client
//!
//! Queries the points-search endpoint of a Qdrant collection:
//! `POST /collections/{collection}/points/search`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::config::QdrantConfig;
use crate::error::VectorSearchError;
use crate::models::{PolicyPayload, ScoredPoint};

/// Trait for vector search clients
#[async_trait]
pub trait VectorSearchClient: Send + Sync {
    /// Search the policy collection for the nearest neighbors of `vector`
    ///
    /// Results are ordered by the backend's relevance ranking, at most
    /// `limit` entries. An optional category filter narrows the corpus
    /// searched.
    async fn search(
        &self,
        vector: Vec<f32>,
        limit: usize,
        category_filter: Option<&str>,
    ) -> Result<Vec<ScoredPoint>, VectorSearchError>;

    /// Check if the vector store is reachable
    async fn is_healthy(&self) -> bool;
}

/// Qdrant-backed vector search client
#[derive(Debug)]
pub struct QdrantVectorClient {
    client: Client,
    config: QdrantConfig,
}

impl QdrantVectorClient {
    /// Create a new Qdrant client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &QdrantConfig) -> Result<Self, VectorSearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VectorSearchError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the search URL for the configured collection
    fn search_url(&self) -> String {
        format!(
            "{}/collections/{}/points/search",
            self.config.base_url.trim_end_matches('/'),
            self.config.collection
        )
    }

    /// Attach the API key header when one is configured
    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header("api-key", key.expose_secret()),
            None => request,
        }
    }

    /// Parse the raw Qdrant search response into scored points
    ///
    /// A hit without a parseable policy payload fails the whole search.
    fn parse_search_response(body: &str) -> Result<Vec<ScoredPoint>, VectorSearchError> {
        let raw: RawSearchResponse =
            serde_json::from_str(body).map_err(|e| VectorSearchError::ParseError(e.to_string()))?;

        raw.result
            .into_iter()
            .map(|point| {
                let payload: PolicyPayload = serde_json::from_value(point.payload)
                    .map_err(|e| VectorSearchError::ParseError(e.to_string()))?;
                Ok(ScoredPoint {
                    score: point.score,
                    payload,
                })
            })
            .collect()
    }
}

/// Qdrant search request body
#[derive(Debug, Serialize)]
struct SearchRequest {
    vector: Vec<f32>,
    limit: usize,
    with_payload: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<serde_json::Value>,
}

/// Raw Qdrant search response envelope
#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    result: Vec<RawScoredPoint>,
}

#[derive(Debug, Deserialize)]
struct RawScoredPoint {
    score: f32,
    #[serde(default)]
    payload: serde_json::Value,
}

#[async_trait]
impl VectorSearchClient for QdrantVectorClient {
    #[instrument(skip(self, vector), fields(collection = %self.config.collection, limit, filter = ?category_filter))]
    async fn search(
        &self,
        vector: Vec<f32>,
        limit: usize,
        category_filter: Option<&str>,
    ) -> Result<Vec<ScoredPoint>, VectorSearchError> {
        let filter = category_filter.map(|category| {
            json!({
                "must": [{
                    "key": "category",
                    "match": { "value": category }
                }]
            })
        });

        let request = SearchRequest {
            vector,
            limit,
            with_payload: true,
            filter,
        };

        debug!("Sending vector search request");

        let response = self
            .authorized(self.client.post(self.search_url()))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(VectorSearchError::CollectionNotFound(
                self.config.collection.clone(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Vector search request failed");
            return Err(VectorSearchError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let body = response.text().await?;
        let hits = Self::parse_search_response(&body)?;

        debug!(hits = hits.len(), "Vector search completed");

        Ok(hits)
    }

    #[instrument(skip(self))]
    async fn is_healthy(&self) -> bool {
        let url = format!("{}/healthz", self.config.base_url.trim_end_matches('/'));
        let response = self
            .authorized(self.client.get(url))
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}
