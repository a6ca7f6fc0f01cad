//! Shared CLI error and exit-code types.

use std::fmt;
use thiserror::Error;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Reading, parsing or writing a file failed
    IoError = 1,
    /// User input was rejected
    ValidationError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned by CLI commands, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CliError {
    /// Exit code to terminate with
    pub code: ExitCode,
    /// Human-readable message printed to stderr
    pub message: String,
}

impl CliError {
    /// I/O or parse failure (exit code 1).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Invalid user input (exit code 2).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
