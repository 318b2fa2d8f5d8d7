//! Consensus detection across a round's responses

use serde::{Deserialize, Serialize};

use super::entities::Round;
use super::similarity::{normalize_text, token_overlap};

/// Phrases that mark a response as concurring, matched as case-insensitive
/// substrings of the normalized text.
pub const AGREEMENT_PHRASES: &[&str] = &["i agree", "consensus", "concur"];

/// Outcome of evaluating one round for agreement.
///
/// Recomputed fresh from each round's responses; never carried across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsensusVerdict {
    pub reached: bool,
    /// Fraction of response pairs that agree, in [0, 1]
    pub agreement_ratio: f64,
    /// Round the verdict was computed from
    pub round: usize,
}

impl ConsensusVerdict {
    /// Verdict for rounds that cannot be judged (fewer than two valid responses)
    pub fn not_reached(round: usize) -> Self {
        Self {
            reached: false,
            agreement_ratio: 0.0,
            round,
        }
    }
}

/// Strategy for judging whether a round's responses have converged.
///
/// The default implementation is lexical ([`TextualConsensus`]); keeping the
/// seam here lets a different scorer replace it without touching the round
/// loop.
pub trait ConsensusDetector: Send + Sync {
    /// Evaluate one round.
    ///
    /// `threshold` is the pairwise similarity at which a pair counts as
    /// agreeing; `min_agreement_ratio` is the fraction of agreeing pairs
    /// required to declare consensus.
    fn evaluate(&self, round: &Round, threshold: f64, min_agreement_ratio: f64)
    -> ConsensusVerdict;
}

/// Default detector: pairwise token overlap plus agreement-phrase matching.
///
/// A pair of valid responses agrees when their token overlap meets the
/// threshold or either response contains an agreement phrase. Errored
/// responses never enter the comparison.
#[derive(Debug, Clone)]
pub struct TextualConsensus {
    phrases: Vec<String>,
}

impl TextualConsensus {
    pub fn new() -> Self {
        Self {
            phrases: AGREEMENT_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Replace the agreement-phrase list (phrases are matched lowercased)
    pub fn with_phrases(phrases: Vec<String>) -> Self {
        Self {
            phrases: phrases.into_iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    fn signals_agreement(&self, normalized: &str) -> bool {
        self.phrases.iter().any(|p| normalized.contains(p.as_str()))
    }
}

impl Default for TextualConsensus {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsensusDetector for TextualConsensus {
    fn evaluate(
        &self,
        round: &Round,
        threshold: f64,
        min_agreement_ratio: f64,
    ) -> ConsensusVerdict {
        let normalized: Vec<String> = round
            .valid_responses()
            .map(|r| normalize_text(&r.text))
            .collect();

        // Agreement over 0 or 1 samples is meaningless
        if normalized.len() < 2 {
            return ConsensusVerdict::not_reached(round.number);
        }

        let mut agreeing = 0usize;
        let mut total = 0usize;
        for i in 0..normalized.len() {
            for j in (i + 1)..normalized.len() {
                total += 1;
                let similar = token_overlap(&normalized[i], &normalized[j]) >= threshold;
                if similar
                    || self.signals_agreement(&normalized[i])
                    || self.signals_agreement(&normalized[j])
                {
                    agreeing += 1;
                }
            }
        }

        let agreement_ratio = agreeing as f64 / total as f64;
        ConsensusVerdict {
            reached: agreement_ratio >= min_agreement_ratio,
            agreement_ratio,
            round: round.number,
        }
    }
}
