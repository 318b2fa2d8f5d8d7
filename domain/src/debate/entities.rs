//! Debate entities - rounds, the transcript, and the final result

use serde::{Deserialize, Serialize};

use super::consensus::ConsensusVerdict;
use super::value_objects::ModelResponse;

/// What the participants are asked to do in a given round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundKind {
    /// Independent first answers, no circulated context
    Initial,
    /// Critique and improve with the prior round's answers circulated
    Refine,
    /// Refine plus an explicit agree/disagree instruction
    ConsensusCheck,
}

impl RoundKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundKind::Initial => "initial",
            RoundKind::Refine => "refine",
            RoundKind::ConsensusCheck => "consensus_check",
        }
    }
}

impl std::fmt::Display for RoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One synchronized pass where every participating model responds.
///
/// Immutable once all responses have arrived. Responses are ordered by
/// participant, not by arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number
    #[serde(rename = "round")]
    pub number: usize,
    pub kind: RoundKind,
    pub responses: Vec<ModelResponse>,
}

impl Round {
    pub fn new(number: usize, kind: RoundKind, responses: Vec<ModelResponse>) -> Self {
        Self {
            number,
            kind,
            responses,
        }
    }

    /// Responses that produced usable text
    pub fn valid_responses(&self) -> impl Iterator<Item = &ModelResponse> {
        self.responses.iter().filter(|r| r.is_success())
    }

    /// This model's response in the round, if it participated
    pub fn response_for(&self, model: &str) -> Option<&ModelResponse> {
        self.responses.iter().find(|r| r.model == model)
    }

    /// Whether every participant's call failed
    pub fn all_failed(&self) -> bool {
        self.responses.iter().all(|r| !r.is_success())
    }
}

/// Ordered history of all rounds in one debate invocation.
///
/// Owned exclusively by a single invocation; never shared across debates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    rounds: Vec<Round>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, round: Round) {
        self.rounds.push(round);
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn last_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

/// Terminal artifact of one debate invocation.
///
/// Serializes to the wire shape consumed by formatters: `question`,
/// `debate_history`, `final_answer`, `consensus` (null in fixed-round mode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateResult {
    pub question: String,
    pub debate_history: Transcript,
    pub final_answer: String,
    pub consensus: Option<ConsensusVerdict>,
}

impl DebateResult {
    pub fn new(
        question: impl Into<String>,
        debate_history: Transcript,
        final_answer: impl Into<String>,
        consensus: Option<ConsensusVerdict>,
    ) -> Self {
        Self {
            question: question.into(),
            debate_history,
            final_answer: final_answer.into(),
            consensus,
        }
    }

    /// Number of rounds actually executed
    pub fn rounds_executed(&self) -> usize {
        self.debate_history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_round() -> Round {
        Round::new(
            1,
            RoundKind::Initial,
            vec![
                ModelResponse::success("m1", "four"),
                ModelResponse::failure("m2", "timeout"),
            ],
        )
    }

    #[test]
    fn test_round_kind_strings() {
        assert_eq!(RoundKind::Initial.as_str(), "initial");
        assert_eq!(RoundKind::Refine.as_str(), "refine");
        assert_eq!(RoundKind::ConsensusCheck.as_str(), "consensus_check");
    }

    #[test]
    fn test_valid_responses_excludes_errors() {
        let round = sample_round();
        let valid: Vec<_> = round.valid_responses().collect();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].model, "m1");
    }

    #[test]
    fn test_response_for_model() {
        let round = sample_round();
        assert_eq!(round.response_for("m2").unwrap().model, "m2");
        assert!(round.response_for("m3").is_none());
    }

    #[test]
    fn test_all_failed() {
        let round = Round::new(
            2,
            RoundKind::Refine,
            vec![
                ModelResponse::failure("m1", "timeout"),
                ModelResponse::failure("m2", "unauthorized"),
            ],
        );
        assert!(round.all_failed());
        assert!(!sample_round().all_failed());
    }

    #[test]
    fn test_transcript_ordering() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());
        transcript.push(sample_round());
        transcript.push(Round::new(2, RoundKind::Refine, vec![]));
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.last_round().unwrap().number, 2);
        assert_eq!(transcript.rounds()[0].number, 1);
    }

    #[test]
    fn test_result_serialization_shape() {
        let mut transcript = Transcript::new();
        transcript.push(sample_round());
        let result = DebateResult::new("What is 2+2?", transcript, "four", None);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["question"], "What is 2+2?");
        assert_eq!(json["final_answer"], "four");
        assert!(json["consensus"].is_null());
        assert_eq!(json["debate_history"][0]["round"], 1);
        assert_eq!(json["debate_history"][0]["kind"], "initial");
        assert_eq!(json["debate_history"][0]["responses"][0]["model"], "m1");
        assert_eq!(json["debate_history"][0]["responses"][0]["response"], "four");
    }
}
