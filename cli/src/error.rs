//! Error types for the CLI application.

use std::fmt;

/// Custom error type for CLI operations.
///
/// Covers everything that can go wrong while running a subcommand, so
/// handlers can propagate with the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// The document failed to interpret
    Parse(chip::ParseError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<chip::ParseError> for CliError {
    fn from(error: chip::ParseError) -> Self {
        CliError::Parse(error)
    }
}
