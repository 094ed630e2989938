//! Qdrant vector search integration for Palisade
//!
//! Provides policy-snippet similarity search against a [Qdrant](https://qdrant.tech)
//! collection over its REST API. The collection is populated by an
//! out-of-band ingestion process; this crate only queries it.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`VectorSearchClient`] defines the interface for
//! similarity search, implemented by [`QdrantVectorClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_qdrant::{QdrantConfig, QdrantVectorClient, VectorSearchClient};
//!
//! let config = QdrantConfig::default();
//! let client = QdrantVectorClient::new(&config)?;
//!
//! let hits = client.search(query_vector, 4, Some("harassment")).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{QdrantVectorClient, VectorSearchClient};
pub use config::QdrantConfig;
pub use error::VectorSearchError;
pub use models::{PolicyPayload, ScoredPoint};
