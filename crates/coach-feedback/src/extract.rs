//! Best-effort extraction of the JSON object embedded in a model reply

use std::sync::LazyLock;

use regex::Regex;

use coach_core::{FeedbackResult, Result};

/// First fenced block, optionally tagged `json`, up to the first closing fence.
static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(.*?)```").expect("fence pattern is valid")
});

/// The trimmed JSON candidate: the first fenced block's contents, or the whole reply.
pub fn extract_candidate(raw: &str) -> &str {
    FENCE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or(raw, |m| m.as_str())
        .trim()
}

/// Parse a model reply into feedback.
///
/// Missing or `null` fields default to empty. Anything that is not a JSON object with
/// correctly typed fields is an error; no partial result is produced.
pub fn parse_feedback(raw: &str) -> Result<FeedbackResult> {
    Ok(serde_json::from_str(extract_candidate(raw))?)
}
