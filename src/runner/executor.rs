//! Command execution
//!
//! This module runs finished command strings in a synchronous child
//! process. The child inherits stdin, stdout, and stderr; the call blocks
//! until it exits.

use crate::error::{ExecutionError, ExecutionResult};
use crate::template::Template;
use colored::Colorize;
use std::path::PathBuf;
use std::process::{Command as StdCommand, Stdio};

/// Synchronous command executor
///
/// All configuration is injected at construction; the executor reads no
/// global flags and no environment. Failures come back as typed results so
/// the caller decides whether to terminate.
#[derive(Debug, Clone)]
pub struct Executor {
    /// Interpreter the command string is handed to
    interpreter: Vec<String>,

    /// Working directory for the child, if different from the caller's
    working_dir: Option<PathBuf>,

    /// Echo each command to stdout before running it
    echo: bool,
}

impl Executor {
    /// Create an executor with default settings (`sh -c`, no echo)
    pub fn new() -> Self {
        Executor {
            interpreter: vec!["sh".to_string(), "-c".to_string()],
            working_dir: None,
            echo: false,
        }
    }

    /// Set the interpreter (e.g. `["bash", "-c"]`)
    ///
    /// The vector must contain at least the program name.
    pub fn with_interpreter(mut self, interpreter: Vec<String>) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Set the working directory for executed commands
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Echo each command to stdout before executing it
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Run a command string, inheriting standard streams
    ///
    /// Returns an error when the interpreter cannot be spawned or the
    /// command exits with a non-zero status.
    pub fn run(&self, command: &str) -> ExecutionResult<()> {
        if self.echo {
            println!("{} {}", "$".bold(), command);
        }

        // Build the command
        let mut child = StdCommand::new(&self.interpreter[0]);

        // Add interpreter args (e.g., "-c" for sh/bash)
        if self.interpreter.len() > 1 {
            child.args(&self.interpreter[1..]);
        }

        // Add the actual command to execute
        child.arg(command);

        // Set working directory
        if let Some(dir) = &self.working_dir {
            child.current_dir(dir);
        }

        // Set up stdio
        child.stdin(Stdio::inherit());
        child.stdout(Stdio::inherit());
        child.stderr(Stdio::inherit());

        // Execute the command
        let status = child.status().map_err(|e| ExecutionError::Spawn {
            program: self.interpreter[0].clone(),
            source: e,
        })?;

        // Check exit status
        if !status.success() {
            return Err(ExecutionError::CommandFailed(status.code()));
        }

        Ok(())
    }

    /// Render a template and run the result
    pub fn run_template(&self, template: &Template) -> ExecutionResult<()> {
        self.run(&template.render())
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}
