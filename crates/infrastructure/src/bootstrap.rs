//! Service wiring
//!
//! Builds a ready analysis pipeline and guardrail gate from configuration.
//! Engine construction fails fast when a required credential is missing;
//! nothing degrades silently.

use std::sync::Arc;

use ai_core::{OpenAiChatEngine, OpenAiEmbeddingEngine};
use application::{AnalysisService, ApplicationError, GuardrailGate};
use integration_qdrant::QdrantVectorClient;
use tracing::info;

use crate::adapters::{ClassifierAdapter, ComplianceAdapter, RetrieverAdapter};
use crate::config::AppConfig;

/// Build the guardrail gate from configuration
///
/// The gate owns the process-wide rate-limiter ledger; build it once and
/// share it across requests.
#[must_use]
pub fn build_guardrail_gate(config: &AppConfig) -> GuardrailGate {
    GuardrailGate::new(config.safety.guardrail_config())
}

/// Build the analysis pipeline from configuration
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` when the configuration is
/// invalid or a collaborator credential is missing.
pub fn build_analysis_service(config: &AppConfig) -> Result<AnalysisService, ApplicationError> {
    config.validate()?;

    let classifier_engine = OpenAiChatEngine::new(config.classifier.clone())
        .map_err(|e| ApplicationError::Configuration(format!("classifier: {e}")))?;
    let compliance_engine = OpenAiChatEngine::new(config.compliance.clone())
        .map_err(|e| ApplicationError::Configuration(format!("compliance: {e}")))?;
    let embedding_engine = OpenAiEmbeddingEngine::new(config.embedding.clone())
        .map_err(|e| ApplicationError::Configuration(format!("embedding: {e}")))?;
    let vector_client = QdrantVectorClient::new(&config.vector_store)
        .map_err(|e| ApplicationError::Configuration(format!("vector_store: {e}")))?;

    let classifier = Arc::new(ClassifierAdapter::new(Arc::new(classifier_engine)));
    let retriever = Arc::new(RetrieverAdapter::new(
        Arc::new(embedding_engine),
        Arc::new(vector_client),
        config.safety.retrieval_top_k,
    ));
    let compliance = Arc::new(ComplianceAdapter::new(Arc::new(compliance_engine)));

    info!(
        classifier_model = %config.classifier.model,
        compliance_model = %config.compliance.model,
        embedding_model = %config.embedding.model,
        collection = %config.vector_store.collection,
        top_k = config.safety.retrieval_top_k,
        "Analysis pipeline wired"
    );

    Ok(AnalysisService::new(classifier, retriever, compliance))
}
