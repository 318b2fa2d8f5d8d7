//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("No models available for the debate")]
    NoModelsAvailable,

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}
