//! Error types for shtpl
//!
//! Templating itself is total and never fails: absent or malformed values
//! degrade to best-effort stringification. The only fallible surface is
//! command execution.

use std::io;
use thiserror::Error;

/// Result type alias for shtpl operations
pub type Result<T> = std::result::Result<T, ShtplError>;

/// Main error type for shtpl
#[derive(Error, Debug)]
pub enum ShtplError {
    /// Command execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Command execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command failed with exit code {0:?}")]
    CommandFailed(Option<i32>),

    #[error("Failed to spawn '{program}': {source}")]
    Spawn { program: String, source: io::Error },
}

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_message_carries_code() {
        let err = ExecutionError::CommandFailed(Some(3));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_spawn_message_names_program() {
        let err = ExecutionError::Spawn {
            program: "sh".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("sh"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_execution_error_converts_to_top_level() {
        let err: ShtplError = ExecutionError::CommandFailed(None).into();
        assert!(matches!(err, ShtplError::Execution(_)));
    }

    #[test]
    fn test_io_error_converts_to_top_level() {
        // Callers mixing their own I/O into a function returning `Result`
        // can use `?` directly.
        let err: ShtplError =
            io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, ShtplError::Io(_)));
        assert!(err.to_string().starts_with("I/O error:"));
    }
}
