//! Command execution
//!
//! This module hands finished command strings to a child process and
//! reports how the child fared.

pub mod executor;

// Re-export main types
pub use executor::*;
