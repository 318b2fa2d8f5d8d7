//! Anthropic Messages API adapter

use super::{DEFAULT_TEMPERATURE, ProviderAdapter, ProviderKind, status_error, transport_error};
use async_trait::async_trait;
use council_application::GatewayError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct AnthropicAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
    api_version: String,
    max_tokens: u32,
}

impl AnthropicAdapter {
    pub fn new(config: &crate::config::FileAnthropicConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: super::resolve_api_key(config.api_key.as_ref(), &config.api_key_env),
            api_key_env: config.api_key_env.clone(),
            api_version: config.api_version.clone(),
            max_tokens: config.max_tokens,
        }
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
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

        let request = MessagesRequest {
            model,
            max_tokens: self.max_tokens,
            temperature: DEFAULT_TEMPERATURE,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!("anthropic: POST /messages model={}", model);
        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.api_version)
            .timeout(timeout)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("malformed response: {}", e)))?;

        let text = parsed
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(text)
    }
}
