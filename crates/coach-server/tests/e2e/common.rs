//! Shared helpers for e2e tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use coach_core::{
    Credential, Error, GenerationRequest, GenerationResult, LLMProvider, Result,
    StaticCredentials,
};
use coach_feedback::FeedbackService;
use tokio::net::TcpListener;

pub const VALID_REPLY: &str =
    r#"{"pros":["Good point"],"cons":["Bad point"],"improvedPrompt":"Improved version"}"#;

/// Provider that answers every call with a fixed reply (or fails) and counts calls.
pub struct StubProvider {
    reply: Option<&'static str>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn replying(text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LLMProvider for StubProvider {
    async fn generate(
        &self,
        _credential: &Credential,
        request: &GenerationRequest,
    ) -> Result<GenerationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Some(text) => Ok(GenerationResult {
                text: text.to_string(),
                model_id: request.model_id.clone(),
            }),
            None => Err(Error::LLMProvider("quota exceeded".to_string())),
        }
    }

    fn name(&self) -> &str {
        "stub"
    }
}

pub fn service_with_key(provider: Arc<StubProvider>) -> Arc<FeedbackService> {
    Arc::new(FeedbackService::new(
        provider,
        Arc::new(StaticCredentials::new(Some("test-api-key".to_string()))),
    ))
}

pub fn service_without_key(provider: Arc<StubProvider>) -> Arc<FeedbackService> {
    Arc::new(FeedbackService::new(
        provider,
        Arc::new(StaticCredentials::missing()),
    ))
}

/// Bind to a random port and spawn the server. Returns the base URL.
pub async fn spawn_server(service: Arc<FeedbackService>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(coach_server::run_serve_on_listener(listener, service));
    format!("http://{}", addr)
}
