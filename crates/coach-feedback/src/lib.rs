//! Prompt analysis for Prompt Coach
//!
//! Builds the two-part request (fixed instruction + labeled user prompt), makes the
//! single provider call and turns the free-form reply into structured feedback.

mod analyzer;
pub mod extract;
pub mod prompt;


pub use analyzer::{FeedbackService, DEFAULT_ANALYZE_TIMEOUT};
pub use extract::{extract_candidate, parse_feedback};

// Re-export core types
pub use coach_core::{AnalysisError, AnalysisRequest, ErrorKind, FeedbackResult};
