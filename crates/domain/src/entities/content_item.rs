//! Content item entity

use serde::{Deserialize, Serialize};

/// A piece of user-generated content submitted for review
///
/// Created once per incoming request and discarded when the request
/// completes; nothing about it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Caller-supplied identifier, unique per request
    pub id: String,
    /// Raw text under review
    pub text: String,
    /// Optional BCP-47-ish language tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl ContentItem {
    /// Create a content item without a language tag
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            language: None,
        }
    }

    /// Attach a language tag
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Number of characters in the text (not bytes)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
