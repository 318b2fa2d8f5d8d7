//! Per-round prompt construction

use crate::core::question::Question;
use crate::debate::entities::{Round, RoundKind};
use crate::registry::descriptor::ModelDescriptor;

use super::template::PromptTemplate;

/// Builds the prompt each participant receives for one round.
///
/// Pure and stateless: identical inputs always produce byte-identical
/// prompts, which is what makes round construction testable.
pub struct RoundPromptBuilder;

impl RoundPromptBuilder {
    /// Build `(model id, prompt)` pairs in participant order.
    ///
    /// Initial rounds (and any round with no prior context) send the same
    /// prompt to everyone; refine and consensus-check rounds tailor the
    /// prompt per model around the prior round's circulated answers.
    pub fn build(
        question: &Question,
        participants: &[ModelDescriptor],
        prior: Option<&Round>,
        kind: RoundKind,
    ) -> Vec<(String, String)> {
        participants
            .iter()
            .map(|model| {
                let prompt = match (kind, prior) {
                    (RoundKind::Initial, _) | (_, None) => PromptTemplate::initial_prompt(question),
                    (RoundKind::Refine, Some(prior)) => {
                        PromptTemplate::refine_prompt(question, model.id(), prior, false)
                    }
                    (RoundKind::ConsensusCheck, Some(prior)) => {
                        PromptTemplate::refine_prompt(question, model.id(), prior, true)
                    }
                };
                (model.id().to_string(), prompt)
            })
            .collect()
    }
}

/// Deterministic synthesis used when no model can write the final answer.
///
/// Concatenates the final round's responses under per-model attribution
/// headers; when every call failed, it reports that explicitly instead.
/// Always returns non-empty text.
pub fn fallback_synthesis(final_round: &Round) -> String {
    if final_round.all_failed() {
        let mut out =
            String::from("All models failed to respond; no synthesized answer is available.\n");
        for response in &final_round.responses {
            let error = response.error.as_deref().unwrap_or("unknown error");
            out.push_str(&format!(
                "\n{}:\n(error: {})\n",
                response.model.to_uppercase(),
                error
            ));
        }
        return out;
    }

    let mut out = String::from("Combined answers from the final round:\n");
    for response in &final_round.responses {
        match &response.error {
            None => out.push_str(&format!(
                "\n{}:\n{}\n",
                response.model.to_uppercase(),
                response.text
            )),
            Some(error) => out.push_str(&format!(
                "\n{}:\n(no answer: {})\n",
                response.model.to_uppercase(),
                error
            )),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::value_objects::ModelResponse;
    use crate::registry::descriptor::BackendKind;

    fn participants() -> Vec<ModelDescriptor> {
        vec![
            ModelDescriptor::new("m1", "Model One", BackendKind::Remote),
            ModelDescriptor::new("m2", "Model Two", BackendKind::Local),
        ]
    }

    fn prior_round() -> Round {
        Round::new(
            1,
            RoundKind::Initial,
            vec![
                ModelResponse::success("m1", "The answer is 4."),
                ModelResponse::success("m2", "Four."),
            ],
        )
    }

    #[test]
    fn test_initial_round_sends_identical_prompts() {
        let question = Question::new("What is 2+2?");
        let prompts =
            RoundPromptBuilder::build(&question, &participants(), None, RoundKind::Initial);
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].0, "m1");
        assert_eq!(prompts[1].0, "m2");
        assert_eq!(prompts[0].1, prompts[1].1);
    }

    #[test]
    fn test_refine_round_tailors_per_model() {
        let question = Question::new("What is 2+2?");
        let prior = prior_round();
        let prompts = RoundPromptBuilder::build(
            &question,
            &participants(),
            Some(&prior),
            RoundKind::Refine,
        );
        assert!(prompts[0].1.contains("M2:\nFour."));
        assert!(prompts[1].1.contains("M1:\nThe answer is 4."));
        assert_ne!(prompts[0].1, prompts[1].1);
    }

    #[test]
    fn test_build_is_pure() {
        let question = Question::new("What is 2+2?");
        let prior = prior_round();
        let first = RoundPromptBuilder::build(
            &question,
            &participants(),
            Some(&prior),
            RoundKind::ConsensusCheck,
        );
        let second = RoundPromptBuilder::build(
            &question,
            &participants(),
            Some(&prior),
            RoundKind::ConsensusCheck,
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_fallback_concatenates_with_attribution() {
        let round = Round::new(
            2,
            RoundKind::Refine,
            vec![
                ModelResponse::success("m1", "The answer is 4."),
                ModelResponse::failure("m2", "timeout"),
            ],
        );
        let text = fallback_synthesis(&round);
        assert!(text.contains("M1:\nThe answer is 4."));
        assert!(text.contains("M2:\n(no answer: timeout)"));
        assert!(!text.is_empty());
    }

    #[test]
    fn test_fallback_reports_total_failure() {
        let round = Round::new(
            1,
            RoundKind::Initial,
            vec![
                ModelResponse::failure("m1", "unauthorized"),
                ModelResponse::failure("m2", "connection refused"),
            ],
        );
        let text = fallback_synthesis(&round);
        assert!(text.starts_with("All models failed to respond"));
        assert!(text.contains("M1:\n(error: unauthorized)"));
        assert!(text.contains("M2:\n(error: connection refused)"));
    }
}
