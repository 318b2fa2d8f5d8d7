//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`DebateParams`] — per-invocation debate tuning (thresholds, timeouts)

pub mod debate_params;

pub use debate_params::DebateParams;
