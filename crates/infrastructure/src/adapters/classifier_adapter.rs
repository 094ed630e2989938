//! Classifier adapter - Chat-model implementation of the classifier port

use std::sync::Arc;

use ai_core::{ChatEngine, ChatRequest};
use application::{ApplicationError, ClassifierPort, CollaboratorStage};
use async_trait::async_trait;
use domain::Classification;
use serde::Deserialize;
use tracing::{debug, instrument};

const SYSTEM_PROMPT: &str = "You are a content safety classifier for user-generated text.";

/// Expected response shape from the classification model
#[derive(Debug, Deserialize)]
struct ClassifierOutput {
    category: String,
    needs_review: bool,
    explanation: String,
}

/// Classifier collaborator backed by a chat-completion engine
pub struct ClassifierAdapter {
    engine: Arc<dyn ChatEngine>,
}

impl std::fmt::Debug for ClassifierAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierAdapter")
            .field("model", &self.engine.model())
            .finish_non_exhaustive()
    }
}

impl ClassifierAdapter {
    /// Create a new classifier adapter
    pub fn new(engine: Arc<dyn ChatEngine>) -> Self {
        Self { engine }
    }

    fn build_prompt(text: &str) -> String {
        format!(
            "Input text:\n{text}\n\n\
             1. Classify the main category of this text \
             (e.g. 'harassment', 'self-harm', 'politics', 'benign').\n\
             2. Decide if this text requires a detailed safety/compliance review.\n\
             3. Explain briefly why.\n\n\
             Respond in JSON with keys:\n\
             - category: string\n\
             - needs_review: boolean\n\
             - explanation: string"
        )
    }
}

#[async_trait]
impl ClassifierPort for ClassifierAdapter {
    #[instrument(skip(self, text), fields(model = %self.engine.model(), text_len = text.len()))]
    async fn classify(&self, text: &str) -> Result<Classification, ApplicationError> {
        let request =
            ChatRequest::with_system(SYSTEM_PROMPT, Self::build_prompt(text)).json_object();

        let response = self.engine.complete(request).await.map_err(|e| {
            ApplicationError::collaborator(CollaboratorStage::Classifier, e.to_string())
        })?;

        let output: ClassifierOutput = serde_json::from_str(&response.content).map_err(|e| {
            ApplicationError::collaborator(
                CollaboratorStage::Classifier,
                format!("response schema mismatch: {e}"),
            )
        })?;

        debug!(
            category = %output.category,
            needs_review = output.needs_review,
            "Classifier response parsed"
        );

        Ok(Classification::new(
            output.category,
            output.needs_review,
            output.explanation,
        ))
    }
}
