//! Debate configuration from TOML (`[debate]` section)

use serde::{Deserialize, Serialize};

/// Raw debate settings from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Rounds in fixed mode (initial round included)
    pub rounds: usize,
    /// Run in consensus-seeking mode by default
    pub consensus: bool,
    /// Round cap in consensus-seeking mode
    pub max_rounds: usize,
    /// Pairwise similarity at which two responses count as agreeing
    pub similarity_threshold: f64,
    /// Fraction of agreeing pairs required to declare consensus
    pub min_agreement_ratio: f64,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
    /// Model id that writes the final synthesis (first participant if unset)
    pub synthesizer: Option<String>,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            rounds: 2,
            consensus: false,
            max_rounds: 5,
            similarity_threshold: 0.85,
            min_agreement_ratio: 0.8,
            timeout_secs: 120,
            synthesizer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileDebateConfig::default();
        assert_eq!(config.rounds, 2);
        assert!(!config.consensus);
        assert_eq!(config.max_rounds, 5);
        assert_eq!(config.similarity_threshold, 0.85);
        assert_eq!(config.min_agreement_ratio, 0.8);
        assert_eq!(config.timeout_secs, 120);
        assert!(config.synthesizer.is_none());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: FileDebateConfig = toml::from_str(
            r#"
rounds = 4
synthesizer = "claude-3-5-sonnet"
"#,
        )
        .unwrap();
        assert_eq!(config.rounds, 4);
        assert_eq!(config.synthesizer.as_deref(), Some("claude-3-5-sonnet"));
        assert_eq!(config.max_rounds, 5);
        assert_eq!(config.timeout_secs, 120);
    }
}
