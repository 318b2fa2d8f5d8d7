//! Progress reporters for long-running debates

pub mod reporter;

pub use reporter::{ProgressReporter, SimpleProgress};
