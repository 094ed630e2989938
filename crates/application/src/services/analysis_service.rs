//! Analysis service - The multi-stage review pipeline
//!
//! Orchestrates the three collaborators in sequence: classify, then (only
//! when the classifier asks for a deeper review) retrieve policy snippets
//! and obtain a compliance decision. When no review is needed the pipeline
//! short-circuits to an "allowed" decision, skipping two remote calls.

use std::{fmt, sync::Arc};

use domain::{AnalysisResult, Confidence, ContentItem, ModerationLabel, PolicyDecision};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use validator::Validate;

use crate::{
    error::ApplicationError,
    ports::{ClassifierPort, CompliancePort, RetrieverPort},
};

/// Confidence attached to short-circuited "allowed" decisions
pub const SHORT_CIRCUIT_CONFIDENCE: f32 = 0.85;

/// Request boundary consumed from the transport layer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    /// Caller-supplied identifier, unique per request
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
    /// Raw text under review
    pub text: String,
    /// Optional language tag
    #[serde(default = "default_language")]
    pub language: Option<String>,
}

fn default_language() -> Option<String> {
    Some("en".to_string())
}

impl AnalyzeRequest {
    /// Validate the request and convert it into a content item
    pub fn into_content_item(self) -> Result<ContentItem, ApplicationError> {
        self.validate()
            .map_err(|e| ApplicationError::validation(e.to_string()))?;

        let mut item = ContentItem::new(self.id, self.text);
        if let Some(language) = self.language {
            item = item.with_language(language);
        }
        Ok(item)
    }
}

/// Service orchestrating the content review pipeline
pub struct AnalysisService {
    classifier: Arc<dyn ClassifierPort>,
    retriever: Arc<dyn RetrieverPort>,
    compliance: Arc<dyn CompliancePort>,
}

impl fmt::Debug for AnalysisService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisService").finish_non_exhaustive()
    }
}

impl AnalysisService {
    /// Create a new analysis service
    pub fn new(
        classifier: Arc<dyn ClassifierPort>,
        retriever: Arc<dyn RetrieverPort>,
        compliance: Arc<dyn CompliancePort>,
    ) -> Self {
        Self {
            classifier,
            retriever,
            compliance,
        }
    }

    /// Analyze a content item and produce the final moderation decision
    ///
    /// A request either yields a complete result or fails entirely; no
    /// partial decision is ever returned, nothing is retried, and nothing
    /// is cached.
    #[instrument(skip(self, item), fields(content_id = %item.id, text_chars = item.char_count()))]
    pub async fn analyze(&self, item: &ContentItem) -> Result<AnalysisResult, ApplicationError> {
        let classification = self.classifier.classify(&item.text).await?;

        debug!(
            category = %classification.category,
            needs_review = classification.needs_review,
            "Content classified"
        );

        if !classification.needs_review {
            let decision = PolicyDecision {
                label: ModerationLabel::Allowed,
                confidence: Confidence::new(SHORT_CIRCUIT_CONFIDENCE)?,
                reasons: vec![
                    format!(
                        "Classifier categorized the content as '{}' and determined no further review is needed.",
                        classification.category
                    ),
                    classification.explanation,
                ],
                category: classification.category,
            };
            debug!("Short-circuited to allowed; retrieval and compliance skipped");
            return Ok(AnalysisResult::new(item.id.clone(), decision));
        }

        let policies = self
            .retriever
            .retrieve(&item.text, Some(classification.category.clone()))
            .await?;

        debug!(retrieved = policies.len(), "Policy snippets retrieved");

        let compliance = self
            .compliance
            .decide(&item.text, &classification.category, &policies)
            .await?;

        debug!(
            label = %compliance.label,
            confidence = %compliance.confidence,
            "Compliance decision received"
        );

        let decision = PolicyDecision::from_compliance(classification.category, compliance);
        Ok(AnalysisResult::new(item.id.clone(), decision))
    }
}
