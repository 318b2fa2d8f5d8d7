//! Configuration file loading for ai-council
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COUNCIL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./council.toml` or `./.council.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/council/config.toml`
//! 5. Fallback: `~/.config/council/config.toml`
//! 6. Default values (built-in model catalog)

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, FileAnthropicConfig, FileConfig, FileDebateConfig,
    FileGoogleConfig, FileModelEntry, FileOllamaConfig, FileOpenAiConfig, FileProvidersConfig,
    FileXaiConfig, Severity, default_catalog,
};
pub use loader::ConfigLoader;
