//! LLM provider trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::credentials::Credential;
use crate::Result;

/// One single-shot generation call: the target model and ordered text segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model_id: String,
    pub segments: Vec<String>,
}

impl GenerationRequest {
    pub fn new(model_id: impl Into<String>, segments: Vec<String>) -> Self {
        Self {
            model_id: model_id.into(),
            segments,
        }
    }
}

/// Result of a text generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// The provider's entire reply
    pub text: String,
    pub model_id: String,
}

/// Trait for LLM providers (e.g., Gemini)
///
/// The provider is treated as an opaque service: it receives a model id and
/// ordered text segments, and answers with one free-form text blob. No streaming,
/// no multi-turn state. Implementations must be safe to share across concurrent
/// requests.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Generate text for `request`, authenticating with `credential`
    async fn generate(
        &self,
        credential: &Credential,
        request: &GenerationRequest,
    ) -> Result<GenerationResult>;

    /// Short provider name used in logs
    fn name(&self) -> &str;
}
