//! Progress notification port
//!
//! Defines the interface for reporting progress during a debate.

use council_domain::{ConsensusVerdict, RoundKind};

/// Callback for progress updates during debate execution
///
/// Implementations live in the presentation layer and can display progress
/// in various ways (indicatif spinners, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a round starts
    fn on_round_start(&self, round: usize, kind: RoundKind, total_models: usize);

    /// Called when one model's call settles within a round
    fn on_model_complete(&self, round: usize, model: &str, success: bool);

    /// Called when a round completes; carries the verdict for checked rounds
    fn on_round_complete(&self, round: usize, verdict: Option<&ConsensusVerdict>);

    /// Called when synthesis starts with the chosen model
    fn on_synthesis_start(&self, model: &str);

    /// Called when synthesis completes; `fallback_used` marks degraded output
    fn on_synthesis_complete(&self, fallback_used: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_round_start(&self, _round: usize, _kind: RoundKind, _total_models: usize) {}
    fn on_model_complete(&self, _round: usize, _model: &str, _success: bool) {}
    fn on_round_complete(&self, _round: usize, _verdict: Option<&ConsensusVerdict>) {}
    fn on_synthesis_start(&self, _model: &str) {}
    fn on_synthesis_complete(&self, _fallback_used: bool) {}
}
