//! Prompt domain
//!
//! Templates and per-round prompt construction for the debate flow.

mod builder;
mod template;

pub use builder::{RoundPromptBuilder, fallback_synthesis};
pub use template::PromptTemplate;
