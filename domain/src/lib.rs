//! Domain layer for ai-council
//!
//! This crate contains the core debate logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A council is a set of independent text-generation models that answer one
//! question through iterative exchange:
//!
//! - **Debate**: each round, every model responds; later rounds circulate the
//!   prior round's answers so models can critique and refine
//! - **Consensus**: pairwise textual agreement across a round's responses,
//!   measured by token overlap and explicit agreement phrases
//! - **Synthesis**: one designated model folds the final round into a single
//!   answer, with a deterministic fallback when it cannot
//!
//! ## Modes
//!
//! - **Fixed-round**: run exactly N rounds, then synthesize
//! - **Consensus-seeking**: keep debating until the detector reports
//!   agreement or a round cap is hit

pub mod core;
pub mod debate;
pub mod prompt;
pub mod registry;

// Re-export commonly used types
pub use core::{error::DomainError, question::Question};
pub use debate::{
    consensus::{ConsensusDetector, ConsensusVerdict, TextualConsensus},
    entities::{DebateResult, Round, RoundKind, Transcript},
    mode::DebateMode,
    similarity::{normalize_text, token_overlap},
    value_objects::ModelResponse,
};
pub use prompt::{PromptTemplate, RoundPromptBuilder, fallback_synthesis};
pub use registry::{
    ModelRegistry, Recommendation,
    descriptor::{BackendKind, ModelDescriptor},
    domains::QuestionDomain,
};
