//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `COUNCIL_*` environment variables (double underscore nests, e.g.
    ///    `COUNCIL_DEBATE__ROUNDS=3`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./council.toml` or `./.council.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/council/config.toml`
    /// 5. Fallback: `~/.config/council/config.toml`
    /// 6. Default values (built-in model catalog)
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level config files (check both names)
        for filename in &["council.toml", ".council.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("COUNCIL_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/council/config.toml if set,
    /// otherwise falls back to ~/.config/council/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("council").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["council.toml", ".council.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Describe the config file locations being used, one line per source
    pub fn config_sources() -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push("  [     ] Env:     COUNCIL_* variables".to_string());

        if let Some(path) = Self::project_config_path() {
            lines.push(format!("  [FOUND] Project: {}", path.display()));
        } else {
            lines.push("  [     ] Project: ./council.toml or ./.council.toml".to_string());
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                lines.push(format!("  [FOUND] Global:  {}", path.display()));
            } else {
                lines.push(format!("  [     ] Global:  {}", path.display()));
            }
        }

        lines.push("  [     ] Default: built-in model catalog".to_string());
        lines
    }
}
