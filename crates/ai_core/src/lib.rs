//! AI Core - Remote model collaborators
//!
//! Provides abstractions for chat-completion and embedding models behind
//! OpenAI-compatible HTTP APIs. The classifier and compliance stages of the
//! review pipeline both run on [`ChatEngine`] implementations pointed at
//! their respective providers; the retriever vectorizes queries through an
//! [`EmbeddingEngine`].

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use openai::{EmbeddingConfig, OpenAiChatEngine, OpenAiEmbeddingEngine};
pub use ports::{ChatEngine, ChatMessage, ChatRequest, ChatResponse, EmbeddingEngine, TokenUsage};
