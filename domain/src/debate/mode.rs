//! Debate operating modes

use super::entities::RoundKind;

/// How the round loop terminates.
///
/// Selected per invocation; both variants bound the number of rounds, so a
/// debate always terminates regardless of what the models say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebateMode {
    /// Run exactly this many rounds, then synthesize
    FixedRounds(usize),
    /// Debate until the detector reports agreement, capped at `max_rounds`
    ConsensusSeeking { max_rounds: usize },
}

impl DebateMode {
    /// Upper bound on rounds this mode may execute
    pub fn round_cap(&self) -> usize {
        match self {
            DebateMode::FixedRounds(rounds) => *rounds,
            DebateMode::ConsensusSeeking { max_rounds } => *max_rounds,
        }
    }

    /// Kind of the given 1-based round under this mode
    pub fn round_kind(&self, number: usize) -> RoundKind {
        if number <= 1 {
            return RoundKind::Initial;
        }
        match self {
            DebateMode::FixedRounds(_) => RoundKind::Refine,
            DebateMode::ConsensusSeeking { .. } => RoundKind::ConsensusCheck,
        }
    }

    /// Whether the consensus detector runs after the given round
    pub fn checks_consensus_after(&self, number: usize) -> bool {
        matches!(self, DebateMode::ConsensusSeeking { .. }) && number >= 2
    }

    pub fn is_consensus_seeking(&self) -> bool {
        matches!(self, DebateMode::ConsensusSeeking { .. })
    }
}

impl std::fmt::Display for DebateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DebateMode::FixedRounds(rounds) => write!(f, "fixed-rounds({})", rounds),
            DebateMode::ConsensusSeeking { max_rounds } => {
                write!(f, "consensus-seeking(max {})", max_rounds)
            }
        }
    }
}
