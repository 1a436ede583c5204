//! Shared CLI plumbing: error type, result alias and exit codes.

use std::fmt;

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Everything succeeded.
    Success = 0,
    /// An I/O or internal failure.
    Error = 1,
    /// The definition file failed validation.
    ValidationFailed = 2,
}

impl ExitCode {
    /// The numeric process exit code.
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// What went wrong while running a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Reading or writing a file failed.
    Io,
    /// A definition file could not be parsed.
    Parse,
    /// The definition parsed but failed a check.
    Validation,
}

/// A command-handler error carrying its kind and a user-facing message.
#[derive(Debug)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Parse,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// The error kind.
    #[must_use]
    pub fn kind(&self) -> CliErrorKind {
        self.kind
    }

    /// The exit code this error maps to.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Io | CliErrorKind::Parse => ExitCode::Error,
            CliErrorKind::Validation => ExitCode::ValidationFailed,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}
