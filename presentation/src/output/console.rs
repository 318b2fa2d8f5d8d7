//! Console output formatter for debate results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use council_domain::{DebateResult, Round, RoundKind};

/// Formats debate results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete debate result
    pub fn format(result: &DebateResult) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("AI Council Results"));
        output.push('\n');

        // Question
        output.push_str(&format!(
            "{} {}\n\n",
            "Question:".cyan().bold(),
            result.question
        ));

        // Models
        output.push_str(&format!(
            "{} {}\n",
            "Models:".cyan().bold(),
            Self::participants(result).join(", ")
        ));

        // Rounds
        for round in result.debate_history.rounds() {
            output.push_str(&Self::section_header(&Self::round_title(round)));
            for response in &round.responses {
                if response.is_success() {
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        format!("── {} ──", response.model).yellow().bold(),
                        Self::indent(&response.text, "  ")
                    ));
                } else {
                    output.push_str(&format!(
                        "\n{}\n  Error: {}\n",
                        format!("── {} ──", response.model).red().bold(),
                        response.error.as_deref().unwrap_or("Unknown")
                    ));
                }
            }
        }

        // Consensus verdict (consensus-seeking mode only)
        if let Some(verdict) = &result.consensus {
            let pct = format!("{:.0}%", verdict.agreement_ratio * 100.0);
            let line = if verdict.reached {
                format!("Consensus reached after round {} (agreement {})", verdict.round, pct)
                    .green()
                    .bold()
            } else {
                format!(
                    "No consensus within {} rounds (agreement {})",
                    result.rounds_executed(),
                    pct
                )
                .yellow()
                .bold()
            };
            output.push_str(&format!("\n{}\n", line));
        }

        // Final answer
        output.push_str(&Self::section_header("Final Answer"));
        output.push_str(&format!("\n{}\n", result.final_answer));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &DebateResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the final answer only (concise output)
    pub fn format_answer_only(result: &DebateResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== AI Council Answer ===".cyan().bold()
        ));

        output.push_str(&format!("{} {}\n\n", "Q:".bold(), result.question));

        output.push_str(&format!(
            "{} {} ({} rounds)\n\n",
            "Models consulted:".dimmed(),
            Self::participants(result).join(", "),
            result.rounds_executed()
        ));

        if let Some(verdict) = &result.consensus {
            let line = if verdict.reached {
                format!("Consensus reached in round {}", verdict.round).green()
            } else {
                "No consensus reached".yellow()
            };
            output.push_str(&format!("{}\n\n", line));
        }

        output.push_str(&result.final_answer);
        output.push('\n');

        output
    }

    fn participants(result: &DebateResult) -> Vec<&str> {
        result
            .debate_history
            .rounds()
            .first()
            .map(|round| round.responses.iter().map(|r| r.model.as_str()).collect())
            .unwrap_or_default()
    }

    fn round_title(round: &Round) -> String {
        let label = match round.kind {
            RoundKind::Initial => "Initial Answers",
            RoundKind::Refine => "Refinement",
            RoundKind::ConsensusCheck => "Consensus Check",
        };
        format!("Round {}: {}", round.number, label)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &DebateResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &DebateResult) -> String {
        Self::format_json(result)
    }

    fn format_answer_only(&self, result: &DebateResult) -> String {
        Self::format_answer_only(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{ConsensusVerdict, ModelResponse, Transcript};

    fn sample_result(consensus: Option<ConsensusVerdict>) -> DebateResult {
        let mut transcript = Transcript::new();
        transcript.push(Round::new(
            1,
            RoundKind::Initial,
            vec![
                ModelResponse::success("gpt-4o-mini", "It is four."),
                ModelResponse::failure("llama3.2", "connection refused"),
            ],
        ));
        transcript.push(Round::new(
            2,
            RoundKind::ConsensusCheck,
            vec![
                ModelResponse::success("gpt-4o-mini", "Still four."),
                ModelResponse::success("llama3.2", "Four."),
            ],
        ));
        DebateResult::new("What is 2+2?", transcript, "The answer is 4.", consensus)
    }

    #[test]
    fn test_full_output_walks_every_round() {
        colored::control::set_override(false);
        let result = sample_result(Some(ConsensusVerdict {
            reached: true,
            agreement_ratio: 0.9,
            round: 2,
        }));
        let text = ConsoleFormatter::format(&result);

        assert!(text.contains("AI Council Results"));
        assert!(text.contains("What is 2+2?"));
        assert!(text.contains("Round 1: Initial Answers"));
        assert!(text.contains("Round 2: Consensus Check"));
        assert!(text.contains("Error: connection refused"));
        assert!(text.contains("Consensus reached after round 2 (agreement 90%)"));
        assert!(text.contains("The answer is 4."));
    }

    #[test]
    fn test_full_output_without_verdict_omits_consensus_line() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&sample_result(None));
        assert!(!text.contains("Consensus reached"));
        assert!(!text.contains("No consensus"));
        assert!(text.contains("Final Answer"));
    }

    #[test]
    fn test_answer_only_skips_rounds() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_answer_only(&sample_result(None));
        assert!(text.contains("What is 2+2?"));
        assert!(text.contains("The answer is 4."));
        assert!(text.contains("gpt-4o-mini, llama3.2"));
        assert!(!text.contains("Round 1"));
    }

    #[test]
    fn test_json_output_parses_back() {
        let result = sample_result(None);
        let json = ConsoleFormatter::format_json(&result);
        let parsed: DebateResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
