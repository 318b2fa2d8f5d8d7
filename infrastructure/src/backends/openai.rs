//! OpenAI-compatible chat completions adapter
//!
//! Serves the OpenAI API and any API that clones its wire shape; xAI's Grok
//! endpoint is driven through the same adapter with a different base URL and
//! key.

use super::{DEFAULT_TEMPERATURE, ProviderAdapter, ProviderKind, status_error, transport_error};
use async_trait::async_trait;
use council_application::GatewayError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct OpenAiAdapter {
    client: reqwest::Client,
    kind: ProviderKind,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
    max_tokens: u32,
}

impl OpenAiAdapter {
    /// Adapter for the OpenAI endpoint
    pub fn new(config: &crate::config::FileOpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            kind: ProviderKind::OpenAi,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: super::resolve_api_key(config.api_key.as_ref(), &config.api_key_env),
            api_key_env: config.api_key_env.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Adapter for the xAI endpoint, which speaks the same protocol
    pub fn for_xai(config: &crate::config::FileXaiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            kind: ProviderKind::Xai,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: super::resolve_api_key(config.api_key.as_ref(), &config.api_key_env),
            api_key_env: config.api_key_env.clone(),
            max_tokens: config.max_tokens,
        }
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn kind(&self) -> ProviderKind {
        self.kind
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

        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: self.max_tokens,
        };

        debug!("{}: POST /chat/completions model={}", self.kind, model);
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .timeout(timeout)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("malformed response: {}", e)))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(text)
    }
}
