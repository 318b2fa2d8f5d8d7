//! Google Gemini generateContent adapter

use super::{DEFAULT_TEMPERATURE, ProviderAdapter, ProviderKind, status_error, transport_error};
use async_trait::async_trait;
use council_application::GatewayError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct GoogleAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
    max_tokens: u32,
}

impl GoogleAdapter {
    pub fn new(config: &crate::config::FileGoogleConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: super::resolve_api_key(config.api_key.as_ref(), &config.api_key_env),
            api_key_env: config.api_key_env.clone(),
            max_tokens: config.max_tokens,
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[async_trait]
impl ProviderAdapter for GoogleAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Google
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| GatewayError::NotConfigured(format!("{} is not set", self.api_key_env)))?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.max_tokens,
                temperature: DEFAULT_TEMPERATURE,
            },
        };

        // The Generative Language API takes the key as a query parameter
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, api_key
        );

        debug!("google: POST generateContent model={}", model);
        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("malformed response: {}", e)))?;

        let text = parsed
            .candidates
            .unwrap_or_default()
            .into_iter()
            .flat_map(|candidate| {
                candidate
                    .content
                    .and_then(|content| content.parts)
                    .unwrap_or_default()
            })
            .filter_map(|part| part.text)
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(text)
    }
}
