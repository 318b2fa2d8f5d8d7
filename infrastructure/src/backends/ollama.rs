//! Local Ollama daemon adapter
//!
//! Talks to the non-streaming `/api/generate` endpoint. No credentials; if
//! the daemon is down the call fails as a transport error like any other
//! unreachable backend.

use super::{DEFAULT_TEMPERATURE, ProviderAdapter, ProviderKind, status_error, transport_error};
use async_trait::async_trait;
use council_application::GatewayError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct OllamaAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaAdapter {
    pub fn new(config: &crate::config::FileOllamaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

#[async_trait]
impl ProviderAdapter for OllamaAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Ollama
    }

    fn is_configured(&self) -> bool {
        true
    }

    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, GatewayError> {
        let request = GenerateRequest {
            model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: DEFAULT_TEMPERATURE,
            },
        };

        debug!("ollama: POST /api/generate model={}", model);
        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .timeout(timeout)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        // A 404 means the model has not been pulled into the daemon
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::ModelNotAvailable(format!(
                "'{}' not found; pull it with: ollama pull {}",
                model, model
            )));
        }
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("malformed response: {}", e)))?;

        let text = parsed.response.unwrap_or_default();
        if text.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileOllamaConfig;

    #[test]
    fn test_always_configured() {
        let adapter = OllamaAdapter::new(&FileOllamaConfig::default());
        assert!(adapter.is_configured());
        assert_eq!(adapter.kind(), ProviderKind::Ollama);
        assert_eq!(adapter.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            model: "llama3.2",
            prompt: "What is 2+2?",
            stream: false,
            options: GenerateOptions { temperature: 0.7 },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3.2");
        assert_eq!(json["prompt"], "What is 2+2?");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["temperature"], 0.7);
    }

    #[test]
    fn test_response_parsing() {
        let parsed: GenerateResponse =
            serde_json::from_str(r#"{"model": "llama3.2", "response": "Four.", "done": true}"#)
                .unwrap();
        assert_eq!(parsed.response.as_deref(), Some("Four."));
    }
}
