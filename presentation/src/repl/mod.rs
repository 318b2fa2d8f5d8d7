//! Interactive council REPL
//!
//! Provides a line-edited interactive loop where each submitted line runs a
//! full debate with the session's settings.

mod session;

pub use session::CouncilRepl;
