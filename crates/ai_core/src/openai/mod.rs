//! OpenAI-compatible API clients
//!
//! Works against any provider exposing the OpenAI chat-completions and
//! embeddings wire format (OpenAI itself, Groq, and compatible gateways).

mod client;
mod embedding;

pub use client::OpenAiChatEngine;
pub use embedding::{EmbeddingConfig, OpenAiEmbeddingEngine};
