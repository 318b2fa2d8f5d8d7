//! Model gateway port
//!
//! Defines the interface for generating text from model backends.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors a backend call can fail with.
///
/// Every variant degrades to an errored response inside a round; none of
/// them aborts a debate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Empty response from model")]
    EmptyResponse,
}

/// Gateway for model text generation
///
/// This port defines how the application layer talks to model backends.
/// Implementations (adapters) live in the infrastructure layer and route by
/// model id. Each call fails independently; the caller bounds it with
/// `timeout` and implementations are expected to honor it per request.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Generate text from the given model for a single prompt
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, GatewayError>;
}
