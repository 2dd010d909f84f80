//! Axum app: configuration, shared state and router.
//!
//! Routes:
//! - `POST /api/analyze` runs one analysis
//! - `GET /api/models` lists the model registry for the UI picker
//! - `GET /api/health` liveness check

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use coach_core::{Error, Result};
use coach_feedback::{FeedbackService, DEFAULT_ANALYZE_TIMEOUT};

use crate::handlers::{analyze_handler, health_handler, models_handler};

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Server configuration (listen address and per-analysis timeout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: String,
    /// Upper bound on the provider call of one analysis
    pub analyze_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            analyze_timeout: DEFAULT_ANALYZE_TIMEOUT,
        }
    }
}

impl ServerConfig {
    /// Builds ServerConfig from environment variables, falling back to [`Default`] for unset ones.
    ///
    /// - `COACH_ADDR` (default 127.0.0.1:3000)
    /// - `COACH_ANALYZE_TIMEOUT_SECS` (default 30, must be a positive whole number)
    pub fn from_env() -> Result<Self> {
        let default = Self::default();
        let analyze_timeout = match std::env::var("COACH_ANALYZE_TIMEOUT_SECS") {
            Ok(raw) => parse_analyze_timeout(&raw)?,
            Err(_) => default.analyze_timeout,
        };
        Ok(Self {
            addr: std::env::var("COACH_ADDR").unwrap_or(default.addr),
            analyze_timeout,
        })
    }
}

fn parse_analyze_timeout(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(Error::Configuration(format!(
            "COACH_ANALYZE_TIMEOUT_SECS must be a positive whole number of seconds, got {raw:?}"
        ))),
    }
}

/// Shared state handed to every handler. Read-only after startup.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) service: Arc<FeedbackService>,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/api/models", get(models_handler))
        .route("/api/health", get(health_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_timeout() {
        assert_eq!(parse_analyze_timeout("12").unwrap(), Duration::from_secs(12));
        assert_eq!(parse_analyze_timeout(" 7 ").unwrap(), Duration::from_secs(7));
    }

    #[test]
    fn test_parse_analyze_timeout_rejects_zero_and_garbage() {
        for raw in ["0", "", "thirty", "-1", "2.5"] {
            let err = parse_analyze_timeout(raw).unwrap_err();
            assert!(matches!(err, Error::Configuration(_)), "{raw:?} gave {err:?}");
        }
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, DEFAULT_ADDR);
        assert_eq!(config.analyze_timeout, DEFAULT_ANALYZE_TIMEOUT);
    }
}
