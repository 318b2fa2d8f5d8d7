//! Prompt templates for the debate flow

use crate::core::question::Question;
use crate::debate::entities::Round;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Fixed framing prepended to the first round, instructing independent
    /// reasoning
    pub fn initial_framing() -> &'static str {
        "You are one voice in a council of independent models. \
         Answer from your own reasoning; do not assume what the others will say."
    }

    /// Prompt for the initial round - identical for every participant
    pub fn initial_prompt(question: &Question) -> String {
        format!(
            "{}\n\nQuestion: {}\n\nProvide your answer and reasoning.",
            Self::initial_framing(),
            question
        )
    }

    /// Prompt for `model` in a refine round, circulating the prior round.
    ///
    /// The model sees its own prior answer separately from everyone else's,
    /// each attributed by id. `explicit_stance` adds the agree/disagree
    /// instruction that consensus-check rounds rely on for phrase matching.
    pub fn refine_prompt(
        question: &Question,
        model: &str,
        prior: &Round,
        explicit_stance: bool,
    ) -> String {
        let mut prompt = format!("Question: {}\n\n", question);

        match prior.response_for(model).filter(|r| r.is_success()) {
            Some(own) => {
                prompt.push_str(&format!("Your previous answer:\n{}\n\n", own.text));
            }
            None => {
                prompt.push_str(
                    "Your previous answer:\n(no answer was recorded for you last round)\n\n",
                );
            }
        }

        prompt.push_str("Other participants' answers:\n");
        let mut circulated = false;
        for response in prior
            .responses
            .iter()
            .filter(|r| r.model != model && r.is_success())
        {
            circulated = true;
            prompt.push_str(&format!(
                "\n{}:\n{}\n",
                response.model.to_uppercase(),
                response.text
            ));
        }
        if !circulated {
            prompt.push_str("\n(no other answers were recorded last round)\n");
        }

        prompt.push_str(
            "\nBased on the answers above, critique the reasoning and provide your \
             improved answer. You may agree, disagree, or present a different \
             perspective. Be specific and cite reasoning.",
        );
        if explicit_stance {
            prompt.push_str(
                "\nState explicitly whether you agree or disagree with each other \
                 participant's conclusion, using the words \"I agree\" or \
                 \"I disagree\".",
            );
        }

        prompt
    }

    /// Prompt asking one model to fold the final round into a single answer
    pub fn synthesis_prompt(question: &Question, final_round: &Round) -> String {
        let mut prompt = format!("Question: {}\n\nFinal round answers:\n", question);

        for response in final_round.valid_responses() {
            prompt.push_str(&format!(
                "\n{}:\n{}\n",
                response.model.to_uppercase(),
                response.text
            ));
        }

        prompt.push_str(
            "\nBased on all the arguments and perspectives presented above, provide \
             a final, synthesized answer to the original question. Consider all \
             viewpoints and provide a balanced, well-reasoned conclusion.",
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::entities::RoundKind;
    use crate::debate::value_objects::ModelResponse;

    fn prior_round() -> Round {
        Round::new(
            1,
            RoundKind::Initial,
            vec![
                ModelResponse::success("gpt-4o-mini", "The answer is 4."),
                ModelResponse::success("llama3.2", "It equals four."),
                ModelResponse::failure("grok-beta", "timeout"),
            ],
        )
    }

    #[test]
    fn test_initial_prompt_contains_question_and_framing() {
        let prompt = PromptTemplate::initial_prompt(&Question::new("What is 2+2?"));
        assert!(prompt.contains("Question: What is 2+2?"));
        assert!(prompt.contains("council of independent models"));
        assert!(prompt.contains("Provide your answer and reasoning."));
    }

    #[test]
    fn test_refine_prompt_separates_own_answer() {
        let prompt = PromptTemplate::refine_prompt(
            &Question::new("What is 2+2?"),
            "gpt-4o-mini",
            &prior_round(),
            false,
        );
        assert!(prompt.contains("Your previous answer:\nThe answer is 4."));
        assert!(prompt.contains("LLAMA3.2:\nIt equals four."));
        // Own answer must not reappear under the others section
        assert!(!prompt.contains("GPT-4O-MINI:"));
    }

    #[test]
    fn test_refine_prompt_skips_errored_responses() {
        let prompt = PromptTemplate::refine_prompt(
            &Question::new("What is 2+2?"),
            "llama3.2",
            &prior_round(),
            false,
        );
        assert!(!prompt.contains("GROK-BETA"));
    }

    #[test]
    fn test_refine_prompt_notes_missing_own_answer() {
        let prompt = PromptTemplate::refine_prompt(
            &Question::new("What is 2+2?"),
            "grok-beta",
            &prior_round(),
            false,
        );
        assert!(prompt.contains("(no answer was recorded for you last round)"));
    }

    #[test]
    fn test_explicit_stance_instruction() {
        let question = Question::new("What is 2+2?");
        let plain = PromptTemplate::refine_prompt(&question, "llama3.2", &prior_round(), false);
        let nudged = PromptTemplate::refine_prompt(&question, "llama3.2", &prior_round(), true);
        assert!(!plain.contains("\"I agree\""));
        assert!(nudged.contains("\"I agree\""));
    }

    #[test]
    fn test_synthesis_prompt_attribution() {
        let prompt =
            PromptTemplate::synthesis_prompt(&Question::new("What is 2+2?"), &prior_round());
        assert!(prompt.contains("GPT-4O-MINI:\nThe answer is 4."));
        assert!(prompt.contains("LLAMA3.2:\nIt equals four."));
        assert!(!prompt.contains("GROK-BETA"));
        assert!(prompt.contains("synthesized answer"));
    }
}
