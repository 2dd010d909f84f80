//! Core traits and types for Prompt Coach
//!
//! This crate defines the types shared across the system: the provider capability
//! the analysis service calls through, credential lookup, the model registry, the
//! request/result shapes of the analyze operation and the error taxonomy.

pub mod credentials;
pub mod error;
pub mod llm;
pub mod models;
pub mod types;


pub use credentials::{
    Credential, CredentialSource, EnvCredentials, StaticCredentials, DEFAULT_API_KEY_VAR,
};
pub use error::{AnalysisError, Error, ErrorKind, Result};
pub use llm::{GenerationRequest, GenerationResult, LLMProvider};
pub use models::{ModelConfig, ModelRegistry, DEFAULT_MODEL};
pub use types::{AnalysisRequest, FeedbackResult};
