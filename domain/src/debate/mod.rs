//! Debate domain
//!
//! This module contains the round/transcript entities, operating modes, and
//! the consensus detection logic for multi-model debates.

pub mod consensus;
pub mod entities;
pub mod mode;
pub mod similarity;
pub mod value_objects;
