//! Infrastructure layer for ai-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod backends;
pub mod config;

// Re-export commonly used types
pub use backends::{
    AnthropicAdapter, GoogleAdapter, OllamaAdapter, OpenAiAdapter, ProviderAdapter, ProviderKind,
    RoutingGateway, bootstrap,
};
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileDebateConfig, FileModelEntry,
    FileProvidersConfig, Severity,
};
