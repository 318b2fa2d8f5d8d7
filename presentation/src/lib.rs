//! Presentation layer for ai-council
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive council REPL.

pub mod cli;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use repl::CouncilRepl;
