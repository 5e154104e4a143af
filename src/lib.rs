//! shtpl - shell command templating with conditional flag removal
//!
//! A template renders into a single command line. Values that are absent
//! (`None`, `false`, or NaN) do not just render as nothing: the flag in
//! front of the slot and the operand after it are dropped with them, so
//! optional switches disappear cleanly instead of leaving `-t` dangling.
//!
//! ```
//! use shtpl::sh;
//!
//! let tag: Option<&str> = None;
//! let cmd = sh!("publish -v" {3} " --tag=" {tag} " mycrate");
//! assert_eq!(cmd, "publish -v3 mycrate");
//! ```
//!
//! The [`Executor`] runs rendered commands through a shell with inherited
//! standard streams, and `resolve!` builds filesystem paths with the same
//! template rules.

pub mod cli;
pub mod error;
pub mod runner;
pub mod template;

// Re-export commonly used types
pub use error::{ExecutionError, ExecutionResult, Result, ShtplError};
pub use runner::Executor;
pub use template::{render, resolve, resolve_path, Template, Value};

/// Current version of shtpl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
