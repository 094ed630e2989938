//! Infrastructure layer - Adapters and technical concerns
//!
//! Implements the application ports on top of the remote-model engines and
//! the vector store, loads layered configuration, and wires a ready
//! pipeline from it.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod telemetry;

pub use adapters::{ClassifierAdapter, ComplianceAdapter, RetrieverAdapter};
pub use bootstrap::{build_analysis_service, build_guardrail_gate};
pub use config::{AppConfig, SafetyConfig};
pub use telemetry::{TelemetryConfig, init_telemetry};
