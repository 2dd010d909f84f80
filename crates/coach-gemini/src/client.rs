//! Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use coach_core::{Credential, Error, GenerationRequest, GenerationResult, LLMProvider, Result};

use crate::config::GeminiConfig;

/// Finish reasons for which the candidate text must not be used
const BAD_FINISH_REASONS: &[&str] = &["SAFETY", "RECITATION", "LANGUAGE"];

/// Gemini `generateContent` client
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

#[derive(Serialize)]
pub(crate) struct GenerateContentRequest<'a> {
    pub(crate) contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
pub(crate) struct Content<'a> {
    pub(crate) role: &'a str,
    pub(crate) parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
pub(crate) struct Part<'a> {
    pub(crate) text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl<'a> GenerateContentRequest<'a> {
    /// All segments go into a single user turn, in order
    pub(crate) fn from_segments(segments: &'a [String]) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: segments.iter().map(|s| Part { text: s }).collect(),
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    pub(crate) fn into_text(self) -> Result<String> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(Error::LLMProvider(format!("Gemini returned no text: {reason}")));
        };

        if let Some(reason) = candidate.finish_reason.as_deref() {
            if BAD_FINISH_REASONS.contains(&reason) {
                return Err(Error::LLMProvider(format!(
                    "Gemini stopped generating: {reason}"
                )));
            }
        }

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            return Err(Error::LLMProvider("Gemini returned an empty reply".to_string()));
        }

        Ok(text)
    }
}

impl GeminiClient {
    /// Create a new Gemini client from configuration
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new Gemini client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    pub(crate) fn endpoint(&self, model_id: &str) -> String {
        format!("{}/models/{}:generateContent", self.config.api_url, model_id)
    }
}

#[async_trait]
impl LLMProvider for GeminiClient {
    async fn generate(
        &self,
        credential: &Credential,
        request: &GenerationRequest,
    ) -> Result<GenerationResult> {
        let url = self.endpoint(&request.model_id);
        let body = GenerateContentRequest::from_segments(&request.segments);

        debug!(model = %request.model_id, segments = request.segments.len(), "calling Gemini");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(e.to_string())
                } else {
                    Error::Network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(%status, model = %request.model_id, "Gemini request failed");
            return Err(Error::LLMProvider(format!(
                "Gemini API request failed with status {status}: {error_text}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        Ok(GenerationResult {
            text: parsed.into_text()?,
            model_id: request.model_id.clone(),
        })
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
