//! Error types for Prompt Coach

use std::fmt;

use thiserror::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Internal error types shared by providers, the analysis service and the server
#[derive(Error, Debug)]
pub enum Error {
    #[error("LLM provider error: {0}")]
    LLMProvider(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Timeout error: {0}")]
    Timeout(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Failure categories a caller of the analyze operation can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing/empty prompt or unknown model id. Caller must correct and resubmit.
    InvalidInput,
    /// Provider credential absent. Operator must fix the deployment.
    Configuration,
    /// The provider call failed or its reply could not be parsed.
    ProviderResponse,
}

impl ErrorKind {
    /// HTTP-style status code for this category
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::InvalidInput => 400,
            ErrorKind::Configuration | ErrorKind::ProviderResponse => 500,
        }
    }
}

/// Classified, user-facing failure of one analysis.
///
/// `message` is meant to be shown to the user verbatim; internal causes are logged
/// where the error is produced and never carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisError {
    pub kind: ErrorKind,
    pub message: String,
}

impl AnalysisError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_prompt() -> Self {
        Self::new(ErrorKind::InvalidInput, "Missing prompt")
    }

    pub fn missing_credential() -> Self {
        Self::new(ErrorKind::Configuration, "Missing Gemini API key")
    }

    pub fn invalid_model(id: &str) -> Self {
        Self::new(ErrorKind::InvalidInput, format!("Invalid model: {id}"))
    }

    pub fn provider_failure() -> Self {
        Self::new(ErrorKind::ProviderResponse, "Error analyzing prompt")
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AnalysisError {}
