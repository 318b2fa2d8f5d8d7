//! Surface textual similarity between responses
//!
//! Consensus detection is deliberately lexical: normalized token overlap
//! rather than semantic similarity. Paraphrased agreement can score low and
//! coincidental vocabulary can score high; the detector compensates with
//! explicit agreement-phrase matching.

use std::collections::HashSet;

/// Lowercase and collapse whitespace runs into single spaces.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn token_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .map(|word| word.to_string())
        .collect()
}

/// Token overlap (Jaccard) ratio between two texts, in [0, 1].
///
/// Tokens are lowercased words with punctuation trimmed from the edges.
/// Two texts that both normalize to nothing count as identical.
pub fn token_overlap(a: &str, b: &str) -> f64 {
    let set_a = token_set(a);
    let set_b = token_set(b);

    if set_a.is_empty() && set_b.is_empty() {
        return 1.0;
    }
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  The\tAnswer\n is  4 "), "the answer is 4");
    }

    #[test]
    fn test_identical_texts_score_one() {
        assert_eq!(token_overlap("The answer is 4", "The answer is 4"), 1.0);
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        assert_eq!(token_overlap("The answer is 4.", "the ANSWER is 4"), 1.0);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        assert_eq!(token_overlap("alpha beta", "gamma delta"), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // intersection {a, b} = 2, union {a, b, c, d} = 4
        let score = token_overlap("a1 b2 c3", "a1 b2 d4");
        assert!((score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_symmetry() {
        let forward = token_overlap("rust is fast", "rust is safe");
        let backward = token_overlap("rust is safe", "rust is fast");
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_empty_edge_cases() {
        assert_eq!(token_overlap("", ""), 1.0);
        assert_eq!(token_overlap("...", "!!!"), 1.0);
        assert_eq!(token_overlap("something", ""), 0.0);
    }
}
