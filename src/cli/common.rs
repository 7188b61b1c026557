//! Shared types for CLI command handlers.

use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Error raised by a CLI command, mapped to a process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// I/O failure (file write, etc.)
    Io(String),
    /// Bad user input (invalid hex, unknown key, ...)
    Validation(String),
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Validation(_) => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(message) | Self::Validation(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::io("boom").exit_code(), 1);
        assert_eq!(CliError::validation("bad").exit_code(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(CliError::validation("bad hex").to_string(), "bad hex");
    }
}
