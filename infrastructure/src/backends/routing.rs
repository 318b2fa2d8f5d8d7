//! Model-id routing over provider adapters
//!
//! The gateway holds one adapter per provider family and a routing table
//! mapping catalog ids to `(adapter, native model name)`. Routes are fixed at
//! construction from the config's model catalog.

use super::{
    AnthropicAdapter, GoogleAdapter, OllamaAdapter, OpenAiAdapter, ProviderAdapter, ProviderKind,
};
use crate::config::{FileConfig, FileModelEntry, FileProvidersConfig};
use async_trait::async_trait;
use council_application::{GatewayError, ModelGateway};
use council_domain::{BackendKind, ModelDescriptor, ModelRegistry, QuestionDomain};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone)]
struct ModelRoute {
    /// Index into the provider list
    provider: usize,
    /// Model name sent on the wire
    native_model: String,
}

pub struct RoutingGateway {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    routes: HashMap<String, ModelRoute>,
}

impl RoutingGateway {
    /// Build the routing table from catalog entries.
    ///
    /// Entries with an empty id, an unknown provider, or no matching adapter
    /// are skipped with a warning; a duplicate id keeps the first entry.
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>, entries: &[FileModelEntry]) -> Self {
        let mut routes = HashMap::new();

        for entry in entries {
            if entry.id.trim().is_empty() {
                warn!("Skipping model entry with empty id");
                continue;
            }
            let Some(kind) = ProviderKind::parse(&entry.provider) else {
                warn!(
                    "Skipping model '{}': unknown provider '{}'",
                    entry.id, entry.provider
                );
                continue;
            };
            let Some(index) = providers.iter().position(|p| p.kind() == kind) else {
                warn!("Skipping model '{}': no {} adapter registered", entry.id, kind);
                continue;
            };
            if routes.contains_key(entry.id.as_str()) {
                warn!("Duplicate model id '{}', keeping the first entry", entry.id);
                continue;
            }
            routes.insert(
                entry.id.clone(),
                ModelRoute {
                    provider: index,
                    native_model: entry.native_model().to_string(),
                },
            );
        }

        Self { providers, routes }
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    fn resolve(&self, model: &str) -> Result<(&dyn ProviderAdapter, &str), GatewayError> {
        let route = self
            .routes
            .get(model)
            .ok_or_else(|| GatewayError::ModelNotAvailable(model.to_string()))?;
        Ok((
            self.providers[route.provider].as_ref(),
            route.native_model.as_str(),
        ))
    }
}

#[async_trait]
impl ModelGateway for RoutingGateway {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, GatewayError> {
        let (provider, native_model) = self.resolve(model)?;
        provider.generate(native_model, prompt, timeout).await
    }
}

/// Wire the registry and gateway up from a loaded configuration.
///
/// One adapter is constructed per provider family the catalog references.
/// Remote models whose provider has no API key stay in the registry as
/// unconfigured; calling them yields a `NotConfigured` error response rather
/// than a startup failure.
pub fn bootstrap(config: &FileConfig) -> (ModelRegistry, RoutingGateway) {
    let adapters = build_adapters(&config.models, &config.providers);
    let registry = build_registry(&config.models, &adapters);
    let gateway = RoutingGateway::new(adapters, &config.models);

    info!(
        "Council ready: {} models ({} configured) across {} providers",
        registry.len(),
        registry.all().iter().filter(|m| m.is_configured()).count(),
        gateway.provider_count()
    );

    (registry, gateway)
}

fn build_adapters(
    entries: &[FileModelEntry],
    providers: &FileProvidersConfig,
) -> Vec<Arc<dyn ProviderAdapter>> {
    let mut adapters: Vec<Arc<dyn ProviderAdapter>> = Vec::new();
    for entry in entries {
        let Some(kind) = ProviderKind::parse(&entry.provider) else {
            continue;
        };
        if adapters.iter().any(|p| p.kind() == kind) {
            continue;
        }
        adapters.push(make_adapter(kind, providers));
    }
    adapters
}

fn make_adapter(kind: ProviderKind, providers: &FileProvidersConfig) -> Arc<dyn ProviderAdapter> {
    match kind {
        ProviderKind::OpenAi => Arc::new(OpenAiAdapter::new(&providers.openai)),
        ProviderKind::Xai => Arc::new(OpenAiAdapter::for_xai(&providers.xai)),
        ProviderKind::Anthropic => Arc::new(AnthropicAdapter::new(&providers.anthropic)),
        ProviderKind::Google => Arc::new(GoogleAdapter::new(&providers.google)),
        ProviderKind::Ollama => Arc::new(OllamaAdapter::new(&providers.ollama)),
    }
}

fn build_registry(
    entries: &[FileModelEntry],
    adapters: &[Arc<dyn ProviderAdapter>],
) -> ModelRegistry {
    let mut descriptors: Vec<ModelDescriptor> = Vec::new();

    for entry in entries {
        if entry.id.trim().is_empty() {
            continue;
        }
        let Some(kind) = ProviderKind::parse(&entry.provider) else {
            continue;
        };
        if descriptors.iter().any(|d| d.id() == entry.id) {
            continue;
        }
        let Some(adapter) = adapters.iter().find(|p| p.kind() == kind) else {
            continue;
        };

        let backend = if kind.is_local() {
            BackendKind::Local
        } else {
            BackendKind::Remote
        };
        let domains: Vec<QuestionDomain> = entry
            .domains
            .iter()
            .filter_map(|tag| QuestionDomain::parse(tag))
            .collect();

        descriptors.push(
            ModelDescriptor::new(&entry.id, entry.display_name(), backend)
                .with_configured(adapter.is_configured())
                .with_domains(domains),
        );
    }

    ModelRegistry::new(descriptors)
}
