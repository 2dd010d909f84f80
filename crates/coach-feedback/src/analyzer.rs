//! The analyze operation: validate, call the provider once, parse the reply

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use coach_core::{
    AnalysisError, AnalysisRequest, CredentialSource, FeedbackResult, GenerationRequest,
    LLMProvider, ModelRegistry,
};

use crate::extract::parse_feedback;
use crate::prompt::build_segments;

/// Upper bound on one provider call unless configured otherwise
pub const DEFAULT_ANALYZE_TIMEOUT: Duration = Duration::from_secs(30);

/// Stateless prompt analysis service.
///
/// Every call is independent: the registry is read-only, the credential is looked
/// up fresh, and nothing is retained between calls.
pub struct FeedbackService {
    provider: Arc<dyn LLMProvider>,
    credentials: Arc<dyn CredentialSource>,
    registry: Arc<ModelRegistry>,
    timeout: Duration,
}

impl FeedbackService {
    /// Create a service over the built-in model registry
    pub fn new(provider: Arc<dyn LLMProvider>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            provider,
            credentials,
            registry: Arc::new(ModelRegistry::builtin()),
            timeout: DEFAULT_ANALYZE_TIMEOUT,
        }
    }

    pub fn with_registry(mut self, registry: Arc<ModelRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The model a request will run against: its own if registered, else the default.
    pub fn resolve_model<'a>(
        &'a self,
        request: &'a AnalysisRequest,
    ) -> Result<&'a str, AnalysisError> {
        match request.model.as_deref() {
            None => Ok(self.registry.default_model_id()),
            Some(id) if self.registry.is_valid_model_id(id) => Ok(id),
            Some(id) => Err(AnalysisError::invalid_model(id)),
        }
    }

    /// Analyze one prompt.
    ///
    /// Checks run in order and the first failure wins: prompt present, credential
    /// configured, model registered. The provider is only called once all pass.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<FeedbackResult, AnalysisError> {
        let prompt = match request.prompt.as_deref() {
            Some(prompt) if !prompt.is_empty() => prompt,
            _ => return Err(AnalysisError::missing_prompt()),
        };

        let Some(credential) = self.credentials.credential() else {
            warn!("no provider credential configured");
            return Err(AnalysisError::missing_credential());
        };

        let model_id = self.resolve_model(request)?;

        let generation = GenerationRequest::new(model_id, build_segments(prompt));
        info!(
            provider = self.provider.name(),
            model = model_id,
            prompt_chars = prompt.chars().count(),
            "analyzing prompt"
        );

        let reply = match tokio::time::timeout(
            self.timeout,
            self.provider.generate(&credential, &generation),
        )
        .await
        {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                error!(error = %e, model = model_id, "provider call failed");
                return Err(AnalysisError::provider_failure());
            }
            Err(_) => {
                error!(timeout = ?self.timeout, model = model_id, "provider call timed out");
                return Err(AnalysisError::provider_failure());
            }
        };

        parse_feedback(&reply.text).map_err(|e| {
            error!(error = %e, reply_chars = reply.text.len(), "unparseable provider reply");
            AnalysisError::provider_failure()
        })
    }
}
