//! Command templating
//!
//! This module builds shell command strings from literal fragments and
//! typed values, dropping the flags of absent values, and optionally
//! resolves the rendered string into an absolute path.

pub mod path;
pub mod render;
pub mod value;

// Re-export main types
pub use path::*;
pub use render::*;
pub use value::*;
