//! Model backend adapters
//!
//! One adapter per provider API family. Each adapter speaks its provider's
//! wire protocol and maps failures onto [`GatewayError`]; the
//! [`routing::RoutingGateway`] dispatches model ids to adapters.

pub mod anthropic;
pub mod google;
pub mod ollama;
pub mod openai;
pub mod routing;

pub use anthropic::AnthropicAdapter;
pub use google::GoogleAdapter;
pub use ollama::OllamaAdapter;
pub use openai::OpenAiAdapter;
pub use routing::{RoutingGateway, bootstrap};

use async_trait::async_trait;
use council_application::GatewayError;
use std::time::Duration;

/// Sampling temperature sent with every generation request
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Provider API families the routing gateway can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    Google,
    Xai,
    Ollama,
}

impl ProviderKind {
    /// Parse the provider name used in config files
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "openai" => Some(ProviderKind::OpenAi),
            "anthropic" => Some(ProviderKind::Anthropic),
            "google" => Some(ProviderKind::Google),
            "xai" => Some(ProviderKind::Xai),
            "ollama" => Some(ProviderKind::Ollama),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Google => "google",
            ProviderKind::Xai => "xai",
            ProviderKind::Ollama => "ollama",
        }
    }

    /// Whether this provider runs on the local machine
    pub fn is_local(&self) -> bool {
        matches!(self, ProviderKind::Ollama)
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One provider backend.
///
/// `model` is always the provider-native model name; translating catalog ids
/// is the routing gateway's job.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Whether the adapter has the credentials it needs to make calls
    fn is_configured(&self) -> bool;

    /// Generate a completion for a single prompt
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, GatewayError>;
}

/// Map a reqwest failure onto the gateway error taxonomy
pub(crate) fn transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Transport(err.to_string())
    }
}

/// Turn a non-success HTTP response into a `RequestFailed` with a body excerpt
pub(crate) async fn status_error(response: reqwest::Response) -> GatewayError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let excerpt: String = body.chars().take(300).collect();
    GatewayError::RequestFailed(format!("HTTP {}: {}", status.as_u16(), excerpt))
}

/// Resolve an API key: explicit config value first, then the environment
pub(crate) fn resolve_api_key(explicit: Option<&String>, env_var: &str) -> Option<String> {
    explicit
        .cloned()
        .filter(|k| !k.trim().is_empty())
        .or_else(|| std::env::var(env_var).ok().filter(|k| !k.trim().is_empty()))
}
