//! Value objects for debate rounds

use serde::{Deserialize, Serialize};

/// One model's answer within a single round (Value Object)
///
/// Created once per model per round and never mutated. A failed backend call
/// still produces a response, with `error` set and empty text, so the round
/// always carries one entry per participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Registry id of the responding model
    pub model: String,
    /// Generated text; empty when the call failed
    #[serde(rename = "response")]
    pub text: String,
    /// Failure description when the call produced no text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModelResponse {
    /// Create a successful response
    pub fn success(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            text: text.into(),
            error: None,
        }
    }

    /// Create a failed response
    pub fn failure(model: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            text: String::new(),
            error: Some(error.into()),
        }
    }

    /// Whether the call produced usable text
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
