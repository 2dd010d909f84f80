//! Request and result types of the analyze operation

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Input to one analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub prompt: Option<String>,
    pub model: Option<String>,
}

impl AnalysisRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Read a request out of a loosely typed JSON body.
    ///
    /// A non-string `prompt` counts as missing. A non-string, non-null `model` is
    /// kept as its JSON text so validation rejects it by name.
    pub fn from_json(body: &Value) -> Self {
        let prompt = body
            .get("prompt")
            .and_then(Value::as_str)
            .map(str::to_string);

        let model = match body.get("model") {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) => Some(id.clone()),
            Some(other) => Some(other.to_string()),
        };

        Self { prompt, model }
    }
}

/// Structured feedback on a prompt.
///
/// Fields missing from the provider's reply, or given as `null`, default to
/// empty; extra fields are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub pros: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cons: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub improved_prompt: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
