//! Model catalog from TOML (`[[models]]` array of tables)

use serde::{Deserialize, Serialize};

/// One catalog entry from TOML
///
/// # Example
///
/// ```toml
/// [[models]]
/// id = "claude-3-5-sonnet"
/// display_name = "Anthropic Claude 3.5 Sonnet"
/// provider = "anthropic"
/// model = "claude-3-5-sonnet-20241022"
/// domains = ["code", "reasoning", "general"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileModelEntry {
    /// Id used on the command line and in the registry
    pub id: String,
    /// Human-readable name; falls back to the id
    pub display_name: Option<String>,
    /// Backend provider: "openai", "anthropic", "google", "xai", "ollama"
    pub provider: String,
    /// Native model name sent on the wire; falls back to the id
    pub model: Option<String>,
    /// Question domains this model is recommended for
    #[serde(default)]
    pub domains: Vec<String>,
}

impl FileModelEntry {
    pub fn new(id: &str, display_name: &str, provider: &str, model: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: Some(display_name.to_string()),
            provider: provider.to_string(),
            model: Some(model.to_string()),
            domains: Vec::new(),
        }
    }

    pub fn with_domains(mut self, domains: &[&str]) -> Self {
        self.domains = domains.iter().map(|d| d.to_string()).collect();
        self
    }

    /// Display name with id fallback
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }

    /// Wire model name with id fallback
    pub fn native_model(&self) -> &str {
        self.model.as_deref().unwrap_or(&self.id)
    }
}

/// Built-in catalog used when no `[[models]]` entries are configured.
///
/// Remote entries only participate once their provider's API key env var is
/// set; the Ollama entries assume a local daemon.
pub fn default_catalog() -> Vec<FileModelEntry> {
    vec![
        FileModelEntry::new("gpt-4o-mini", "OpenAI GPT-4o Mini", "openai", "gpt-4o-mini")
            .with_domains(&["code", "general"]),
        FileModelEntry::new(
            "claude-3-5-sonnet",
            "Anthropic Claude 3.5 Sonnet",
            "anthropic",
            "claude-3-5-sonnet-20241022",
        )
        .with_domains(&["code", "reasoning", "general"]),
        FileModelEntry::new(
            "gemini-1.5-flash",
            "Google Gemini 1.5 Flash",
            "google",
            "gemini-1.5-flash",
        )
        .with_domains(&["science", "general"]),
        FileModelEntry::new("grok-beta", "xAI Grok Beta", "xai", "grok-beta")
            .with_domains(&["math", "reasoning", "general"]),
        FileModelEntry::new("llama3.2", "Ollama Llama 3.2", "ollama", "llama3.2")
            .with_domains(&["reasoning", "general"]),
        FileModelEntry::new("mistral", "Ollama Mistral", "ollama", "mistral")
            .with_domains(&["science", "math", "general"]),
    ]
}
