//! Output formatter trait

use council_domain::DebateResult;

/// Trait for formatting debate results
pub trait OutputFormatter {
    /// Format the complete debate result, round by round
    fn format(&self, result: &DebateResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &DebateResult) -> String;

    /// Format the final answer only (concise output)
    fn format_answer_only(&self, result: &DebateResult) -> String;
}
