//! Model registry
//!
//! The set of configured model backends plus domain-based recommendation.
//! Built once from configuration; read-only during a debate, so each
//! invocation can cheaply clone its own copy.

pub mod descriptor;
pub mod domains;

use serde::Serialize;

use crate::core::error::DomainError;
use descriptor::ModelDescriptor;
use domains::QuestionDomain;

/// Advisory output of [`ModelRegistry::recommend`].
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub domain: QuestionDomain,
    pub models: Vec<ModelDescriptor>,
}

/// Registered model backends, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: Vec<ModelDescriptor>,
}

impl ModelRegistry {
    pub fn new(models: Vec<ModelDescriptor>) -> Self {
        Self { models }
    }

    /// All registered models, in configuration order
    pub fn all(&self) -> &[ModelDescriptor] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Look up one model by id
    pub fn get(&self, id: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.id() == id)
    }

    /// Resolve requested ids into participant descriptors.
    ///
    /// Preserves request order and drops duplicate ids; an empty request
    /// resolves to every registered model. Fails when an id is unknown or
    /// when nothing in the resolved set is configured.
    pub fn resolve(&self, requested: &[String]) -> Result<Vec<ModelDescriptor>, DomainError> {
        let mut resolved: Vec<ModelDescriptor> = Vec::new();

        if requested.is_empty() {
            resolved = self.models.clone();
        } else {
            for id in requested {
                let descriptor = self
                    .get(id)
                    .ok_or_else(|| DomainError::UnknownModel(id.clone()))?;
                if !resolved.iter().any(|m| m.id() == descriptor.id()) {
                    resolved.push(descriptor.clone());
                }
            }
        }

        if resolved.is_empty() || resolved.iter().all(|m| !m.is_configured()) {
            return Err(DomainError::NoModelsAvailable);
        }
        Ok(resolved)
    }

    /// Classify the question and suggest models tagged for its domain.
    ///
    /// Falls back to `general`-tagged models, then to the whole registry, so
    /// the recommendation is never empty while any model is registered.
    pub fn recommend(&self, question: &str) -> Recommendation {
        let domain = QuestionDomain::classify(question);

        let tagged =
            |wanted: QuestionDomain| -> Vec<ModelDescriptor> {
                self.models
                    .iter()
                    .filter(|m| m.serves_domain(wanted))
                    .cloned()
                    .collect()
            };

        let mut models = tagged(domain);
        if models.is_empty() && domain != QuestionDomain::General {
            models = tagged(QuestionDomain::General);
        }
        if models.is_empty() {
            models = self.models.clone();
        }

        Recommendation { domain, models }
    }
}
