//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and turned into domain types at bootstrap.

mod debate;
mod models;
mod providers;

pub use debate::FileDebateConfig;
pub use models::{FileModelEntry, default_catalog};
pub use providers::{
    FileAnthropicConfig, FileGoogleConfig, FileOllamaConfig, FileOpenAiConfig,
    FileProvidersConfig, FileXaiConfig,
};

use crate::backends::ProviderKind;
use council_domain::QuestionDomain;
use serde::{Deserialize, Serialize};

/// How serious a configuration issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The config loads but something will be ignored or surprising
    Warning,
    /// The config cannot produce a working council
    Error,
}

/// Machine-readable issue category.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    EmptyModelId,
    DuplicateModelId { id: String },
    UnknownProvider { id: String, provider: String },
    UnknownDomainTag { id: String, tag: String },
    NoModelsConfigured,
    ValueOutOfRange { field: String },
}

/// One issue detected while validating a configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    fn warning(code: ConfigIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message,
        }
    }

    fn error(code: ConfigIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Debate settings
    pub debate: FileDebateConfig,
    /// Model catalog; the built-in catalog applies when the key is absent
    #[serde(default = "default_catalog")]
    pub models: Vec<FileModelEntry>,
    /// Provider endpoints and credentials
    pub providers: FileProvidersConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            debate: FileDebateConfig::default(),
            models: default_catalog(),
            providers: FileProvidersConfig::default(),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. The model catalog (empty ids, duplicates, unroutable providers,
    ///    unknown domain tags)
    /// 2. Debate parameter ranges
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.models.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::NoModelsConfigured,
                "models: at least one [[models]] entry is required".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &self.models {
            if entry.id.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyModelId,
                    "models: model id cannot be empty".to_string(),
                ));
                continue;
            }
            if !seen.insert(entry.id.as_str()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateModelId {
                        id: entry.id.clone(),
                    },
                    format!("models: duplicate id '{}', later entry ignored", entry.id),
                ));
            }
            if ProviderKind::parse(&entry.provider).is_none() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::UnknownProvider {
                        id: entry.id.clone(),
                        provider: entry.provider.clone(),
                    },
                    format!(
                        "models: '{}' names unknown provider '{}' (expected openai, anthropic, google, xai, or ollama)",
                        entry.id, entry.provider
                    ),
                ));
            }
            for tag in &entry.domains {
                if QuestionDomain::parse(tag).is_none() {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::UnknownDomainTag {
                            id: entry.id.clone(),
                            tag: tag.clone(),
                        },
                        format!("models: '{}' has unknown domain tag '{}', ignored", entry.id, tag),
                    ));
                }
            }
        }

        for (field, value) in [
            ("debate.similarity_threshold", self.debate.similarity_threshold),
            ("debate.min_agreement_ratio", self.debate.min_agreement_ratio),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::ValueOutOfRange {
                        field: field.to_string(),
                    },
                    format!("{}: {} is outside (0, 1]", field, value),
                ));
            }
        }
        for (field, value) in [
            ("debate.rounds", self.debate.rounds),
            ("debate.max_rounds", self.debate.max_rounds),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::ValueOutOfRange {
                        field: field.to_string(),
                    },
                    format!("{}: must be at least 1", field),
                ));
            }
        }
        if self.debate.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ValueOutOfRange {
                    field: "debate.timeout_secs".to_string(),
                },
                "debate.timeout_secs: must be at least 1".to_string(),
            ));
        }

        issues
    }
}
