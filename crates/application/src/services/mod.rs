//! Application services - Use case implementations

mod analysis_service;

pub use analysis_service::{AnalysisService, AnalyzeRequest, SHORT_CIRCUIT_CONFIDENCE};
