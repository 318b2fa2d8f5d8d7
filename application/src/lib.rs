//! Application layer for ai-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::debate_params::DebateParams;
pub use ports::{
    model_gateway::{GatewayError, ModelGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::run_debate::{RunDebateError, RunDebateInput, RunDebateUseCase};
