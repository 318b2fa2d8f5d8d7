//! Model descriptor value objects

use serde::{Deserialize, Serialize};

use super::domains::QuestionDomain;

/// Where a model backend runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Hosted API reached over the network
    Remote,
    /// Local inference endpoint (an Ollama daemon)
    Local,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Remote => "remote",
            BackendKind::Local => "local",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static metadata for one registered model backend (Value Object)
///
/// Built once at registry load time from configuration and immutable for the
/// lifetime of a debate. `configured` reflects whether the backing provider
/// has what it needs (an API key for remote providers); unconfigured models
/// may still be addressed, their calls just fail fast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    id: String,
    display_name: String,
    backend_kind: BackendKind,
    configured: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    domains: Vec<QuestionDomain>,
}

impl ModelDescriptor {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        backend_kind: BackendKind,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            backend_kind,
            configured: true,
            domains: Vec::new(),
        }
    }

    /// Tag the model for recommendation domains
    pub fn with_domains(mut self, domains: Vec<QuestionDomain>) -> Self {
        self.domains = domains;
        self
    }

    pub fn with_configured(mut self, configured: bool) -> Self {
        self.configured = configured;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend_kind
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn domains(&self) -> &[QuestionDomain] {
        &self.domains
    }

    pub fn serves_domain(&self, domain: QuestionDomain) -> bool {
        self.domains.contains(&domain)
    }
}

impl std::fmt::Display for ModelDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_accessors() {
        let descriptor = ModelDescriptor::new("gpt-4o-mini", "GPT-4o Mini", BackendKind::Remote)
            .with_domains(vec![QuestionDomain::Code, QuestionDomain::General]);

        assert_eq!(descriptor.id(), "gpt-4o-mini");
        assert_eq!(descriptor.display_name(), "GPT-4o Mini");
        assert_eq!(descriptor.backend_kind(), BackendKind::Remote);
        assert!(descriptor.is_configured());
        assert!(descriptor.serves_domain(QuestionDomain::Code));
        assert!(!descriptor.serves_domain(QuestionDomain::Math));
    }

    #[test]
    fn test_unconfigured_descriptor() {
        let descriptor = ModelDescriptor::new("grok-beta", "Grok Beta", BackendKind::Remote)
            .with_configured(false);
        assert!(!descriptor.is_configured());
    }

    #[test]
    fn test_display() {
        let descriptor = ModelDescriptor::new("llama3.2", "Llama 3.2 (local)", BackendKind::Local);
        assert_eq!(descriptor.to_string(), "Llama 3.2 (local) (llama3.2)");
    }

    #[test]
    fn test_backend_kind_serialization() {
        assert_eq!(
            serde_json::to_value(BackendKind::Remote).unwrap(),
            serde_json::json!("remote")
        );
        assert_eq!(
            serde_json::to_value(BackendKind::Local).unwrap(),
            serde_json::json!("local")
        );
    }
}
