//! Model registry: the static allow-list of generation models

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identifier of the model used when a request names none
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// One permitted generation model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Stable identifier sent to the provider
    pub id: String,
    /// Display label
    pub name: String,
    /// Usage guidance
    pub description: String,
}

impl ModelConfig {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Immutable, ordered catalog of accepted model ids.
///
/// Requests naming an id outside this list are rejected locally, before any
/// provider call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRegistry {
    models: Vec<ModelConfig>,
    default_id: String,
}

impl ModelRegistry {
    /// Build a registry, rejecting empty lists, duplicate ids and unknown defaults.
    pub fn new(models: Vec<ModelConfig>, default_id: impl Into<String>) -> Result<Self> {
        let default_id = default_id.into();

        if models.is_empty() {
            return Err(Error::Configuration(
                "model registry must contain at least one model".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for model in &models {
            if !seen.insert(model.id.as_str()) {
                return Err(Error::Configuration(format!(
                    "duplicate model id in registry: {}",
                    model.id
                )));
            }
        }

        if !seen.contains(default_id.as_str()) {
            return Err(Error::Configuration(format!(
                "default model {default_id} is not in the registry"
            )));
        }

        Ok(Self { models, default_id })
    }

    /// The built-in Gemini catalog
    pub fn builtin() -> Self {
        Self {
            models: vec![
                ModelConfig::new(
                    "gemini-1.5-flash",
                    "Gemini 1.5 Flash",
                    "Fast and cost-effective - suitable for most tasks",
                ),
                ModelConfig::new(
                    "gemini-1.5-pro",
                    "Gemini 1.5 Pro",
                    "More advanced - for complex analysis",
                ),
            ],
            default_id: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn list_models(&self) -> &[ModelConfig] {
        &self.models
    }

    /// Exact, case-sensitive lookup
    pub fn get_model_by_id(&self, id: &str) -> Option<&ModelConfig> {
        self.models.iter().find(|model| model.id == id)
    }

    pub fn is_valid_model_id(&self, id: &str) -> bool {
        self.get_model_by_id(id).is_some()
    }

    pub fn default_model_id(&self) -> &str {
        &self.default_id
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
