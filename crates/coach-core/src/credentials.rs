//! Provider credentials, looked up at call time

use std::env;
use std::fmt;

/// Environment variable holding the Gemini API key
pub const DEFAULT_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// A provider API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([redacted])")
    }
}

/// Where the analyze operation gets its credential from.
///
/// Consulted on every call, so a key added or removed between deployments is
/// picked up without restarting.
pub trait CredentialSource: Send + Sync {
    fn credential(&self) -> Option<Credential>;
}

/// Reads the key from an environment variable each time it is asked.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_VAR)
    }
}

impl CredentialSource for EnvCredentials {
    fn credential(&self) -> Option<Credential> {
        env::var(&self.var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(Credential)
    }
}

/// A fixed key (or none), e.g. from a CLI flag.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Option<Credential>);

impl StaticCredentials {
    pub fn new(key: Option<String>) -> Self {
        Self(key.filter(|k| !k.trim().is_empty()).map(Credential))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredentials {
    fn credential(&self) -> Option<Credential> {
        self.0.clone()
    }
}
