//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API.
    pub base_url: String,
    /// Max tokens per response.
    pub max_tokens: u32,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            max_tokens: 1024,
        }
    }
}

/// Anthropic API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Max tokens per response.
    pub max_tokens: u32,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.anthropic.com/v1".to_string(),
            max_tokens: 1024,
            api_version: "2023-06-01".to_string(),
        }
    }
}

/// Google Gemini API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGoogleConfig {
    /// Environment variable name for the API key (default: "GOOGLE_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Max tokens per response.
    pub max_tokens: u32,
}

impl Default for FileGoogleConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GOOGLE_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            max_tokens: 1024,
        }
    }
}

/// xAI API provider configuration (OpenAI-compatible).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileXaiConfig {
    /// Environment variable name for the API key (default: "XAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the xAI API.
    pub base_url: String,
    /// Max tokens per response.
    pub max_tokens: u32,
}

impl Default for FileXaiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "XAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.x.ai/v1".to_string(),
            max_tokens: 1024,
        }
    }
}

/// Local Ollama daemon configuration. No API key; a model is reachable
/// whenever the daemon is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Base URL of the Ollama daemon.
    pub base_url: String,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
    /// Anthropic API settings.
    pub anthropic: FileAnthropicConfig,
    /// Google Gemini API settings.
    pub google: FileGoogleConfig,
    /// xAI API settings.
    pub xai: FileXaiConfig,
    /// Local Ollama settings.
    pub ollama: FileOllamaConfig,
}
