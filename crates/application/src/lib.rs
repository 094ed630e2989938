//! Application layer - Use cases and orchestration
//!
//! Contains the analysis pipeline, the guardrail gate, and the port
//! definitions for the external collaborators. Orchestrates domain objects
//! and infrastructure adapters.

pub mod error;
pub mod guardrail;
pub mod ports;
pub mod rate_limit;
pub mod request_context;
pub mod services;

pub use error::{ApplicationError, CollaboratorStage};
pub use guardrail::{GuardrailConfig, GuardrailGate};
pub use ports::*;
pub use rate_limit::{RateLimiterConfig, SlidingWindowRateLimiter};
pub use request_context::RequestContext;
pub use services::*;
