//! Compliance adapter - Chat-model implementation of the compliance port

use std::sync::Arc;

use ai_core::{ChatEngine, ChatRequest};
use application::{ApplicationError, CollaboratorStage, CompliancePort};
use async_trait::async_trait;
use domain::{ComplianceDecision, Confidence, RetrievedPolicy};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

const SYSTEM_PROMPT: &str = "You are a policy compliance analyst for user-generated content.";

/// Expected response shape from the compliance model
#[derive(Debug, Deserialize)]
struct ComplianceOutput {
    label: String,
    confidence: f32,
    reasons: Vec<String>,
}

/// Compliance collaborator backed by a chat-completion engine
pub struct ComplianceAdapter {
    engine: Arc<dyn ChatEngine>,
}

impl std::fmt::Debug for ComplianceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplianceAdapter")
            .field("model", &self.engine.model())
            .finish_non_exhaustive()
    }
}

impl ComplianceAdapter {
    /// Create a new compliance adapter
    pub fn new(engine: Arc<dyn ChatEngine>) -> Self {
        Self { engine }
    }

    fn format_policies(policies: &[RetrievedPolicy]) -> String {
        if policies.is_empty() {
            return "None".to_string();
        }
        policies
            .iter()
            .map(RetrievedPolicy::format_reference)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn build_prompt(text: &str, category: &str, policies: &[RetrievedPolicy]) -> String {
        format!(
            "Content:\n{text}\n\n\
             Classifier category:\n{category}\n\n\
             Retrieved policy snippets:\n{policies}\n\n\
             Task:\n\
             Decide the best policy outcome: allowed, flag, or block.\n\n\
             Provide:\n\
             - label: one of allowed/flag/block\n\
             - confidence: number 0..1\n\
             - reasons: 2-5 short bullet reasons tied to the policies when possible\n\n\
             Respond in JSON with keys: label, confidence, reasons",
            policies = Self::format_policies(policies)
        )
    }

    fn parse_decision(content: &str) -> Result<ComplianceDecision, ApplicationError> {
        let schema_error = |message: String| {
            ApplicationError::collaborator(
                CollaboratorStage::Compliance,
                format!("response schema mismatch: {message}"),
            )
        };

        let output: ComplianceOutput =
            serde_json::from_str(content).map_err(|e| schema_error(e.to_string()))?;

        let label = output
            .label
            .parse()
            .map_err(|e: domain::DomainError| schema_error(e.to_string()))?;

        let confidence =
            Confidence::new(output.confidence).map_err(|e| schema_error(e.to_string()))?;

        if !(2..=5).contains(&output.reasons.len()) {
            warn!(
                count = output.reasons.len(),
                "Compliance model returned an unexpected reason count"
            );
        }

        ComplianceDecision::new(label, confidence, output.reasons)
            .map_err(|e| schema_error(e.to_string()))
    }
}

#[async_trait]
impl CompliancePort for ComplianceAdapter {
    #[instrument(skip(self, text, policies), fields(model = %self.engine.model(), category, policies = policies.len()))]
    async fn decide(
        &self,
        text: &str,
        category: &str,
        policies: &[RetrievedPolicy],
    ) -> Result<ComplianceDecision, ApplicationError> {
        let request =
            ChatRequest::with_system(SYSTEM_PROMPT, Self::build_prompt(text, category, policies))
                .json_object();

        let response = self.engine.complete(request).await.map_err(|e| {
            ApplicationError::collaborator(CollaboratorStage::Compliance, e.to_string())
        })?;

        let decision = Self::parse_decision(&response.content)?;

        debug!(
            label = %decision.label,
            confidence = %decision.confidence,
            "Compliance response parsed"
        );

        Ok(decision)
    }
}
