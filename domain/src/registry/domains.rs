//! Lexical question-domain classification
//!
//! Buckets a question by keyword presence so the registry can suggest models
//! tagged for that kind of work. Purely advisory; it never gates a debate.

use serde::{Deserialize, Serialize};

const CODE_KEYWORDS: &[&str] = &[
    "python",
    "javascript",
    "rust",
    "code",
    "program",
    "function",
    "algorithm",
    "debug",
    "optimize",
    "compile",
];

const MATH_KEYWORDS: &[&str] = &[
    "prove",
    "integral",
    "derivative",
    "equation",
    "theorem",
    "calculate",
    "geometry",
    "probability",
];

const REASONING_KEYWORDS: &[&str] = &[
    "reason",
    "strategy",
    "plan",
    "decide",
    "tradeoff",
    "argue",
    "ethics",
    "policy",
];

const SCIENCE_KEYWORDS: &[&str] = &[
    "biology",
    "physics",
    "chemistry",
    "experiment",
    "molecule",
    "quantum",
    "evolution",
];

/// Lexical domain of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionDomain {
    Code,
    Math,
    Reasoning,
    Science,
    General,
}

impl QuestionDomain {
    /// Buckets in match-precedence order; the first bucket with a keyword hit
    /// wins.
    const BUCKETS: &'static [(QuestionDomain, &'static [&'static str])] = &[
        (QuestionDomain::Code, CODE_KEYWORDS),
        (QuestionDomain::Math, MATH_KEYWORDS),
        (QuestionDomain::Reasoning, REASONING_KEYWORDS),
        (QuestionDomain::Science, SCIENCE_KEYWORDS),
    ];

    /// Classify a question by keyword substring presence.
    ///
    /// Deterministic: same input, same domain. Falls back to `General` when
    /// no keyword matches.
    pub fn classify(question: &str) -> Self {
        let lower = question.to_lowercase();
        for (domain, keywords) in Self::BUCKETS {
            if keywords.iter().any(|keyword| lower.contains(keyword)) {
                return *domain;
            }
        }
        QuestionDomain::General
    }

    /// Parse a configuration tag; `None` for unrecognized tags
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "code" => Some(QuestionDomain::Code),
            "math" => Some(QuestionDomain::Math),
            "reasoning" => Some(QuestionDomain::Reasoning),
            "science" => Some(QuestionDomain::Science),
            "general" => Some(QuestionDomain::General),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionDomain::Code => "code",
            QuestionDomain::Math => "math",
            QuestionDomain::Reasoning => "reasoning",
            QuestionDomain::Science => "science",
            QuestionDomain::General => "general",
        }
    }
}

impl std::fmt::Display for QuestionDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
