//! Debate parameters — round loop control.
//!
//! [`DebateParams`] groups the static parameters that control one debate
//! invocation in [`RunDebateUseCase`](crate::use_cases::run_debate::RunDebateUseCase).
//! These are application-layer knobs, not domain policy; the use case
//! validates them before any backend call.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lowest accepted round count in either mode.
pub const MIN_ROUNDS: usize = 1;
/// Highest accepted round count in fixed-round mode.
pub const MAX_FIXED_ROUNDS: usize = 15;
/// Highest accepted round cap in consensus-seeking mode.
pub const MAX_CONSENSUS_ROUNDS: usize = 20;

/// Default pairwise similarity at which a response pair counts as agreeing.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;
/// Default fraction of agreeing pairs required to declare consensus.
pub const DEFAULT_MIN_AGREEMENT_RATIO: f64 = 0.8;
/// Default bound on each individual backend call.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(120);

/// Per-invocation debate tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateParams {
    /// Pairwise similarity threshold, in (0, 1]
    pub similarity_threshold: f64,
    /// Agreeing-pair ratio needed to declare consensus, in (0, 1]
    pub min_agreement_ratio: f64,
    /// Bound on each individual backend call
    pub per_call_timeout: Duration,
}

impl Default for DebateParams {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            min_agreement_ratio: DEFAULT_MIN_AGREEMENT_RATIO,
            per_call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }
}

impl DebateParams {
    // ==================== Builder Methods ====================

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_min_agreement_ratio(mut self, ratio: f64) -> Self {
        self.min_agreement_ratio = ratio;
        self
    }

    pub fn with_per_call_timeout(mut self, timeout: Duration) -> Self {
        self.per_call_timeout = timeout;
        self
    }
}
