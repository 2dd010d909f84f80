//! Gemini configuration

use serde::{Deserialize, Serialize};
use std::env;

use coach_core::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Configuration for the Gemini client.
///
/// The API key is deliberately absent: it is looked up per call through a
/// `CredentialSource`, so the process starts even when it is not set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_url: String,
    pub request_timeout_secs: u64,
}

impl GeminiConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let request_timeout_secs = match env::var("GEMINI_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout_secs(&raw)?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self::new(api_url).with_timeout_secs(request_timeout_secs))
    }

    /// Create configuration with an explicit base URL
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// A positive whole number of seconds. Zero would make every request time out.
fn parse_timeout_secs(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(Error::Configuration(format!(
            "GEMINI_REQUEST_TIMEOUT_SECS must be a positive whole number of seconds, got {raw:?}"
        ))),
    }
}
