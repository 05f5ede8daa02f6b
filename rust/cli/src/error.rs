//! Error types for the CLI application.
//!
//! All command handlers return `Result<(), CliError>` so errors can be
//! propagated with `?` and mapped to a single exit code at the top level.

use std::fmt;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<String> for CliError {
    fn from(error: String) -> Self {
        CliError::Engine(error)
    }
}

impl From<&str> for CliError {
    fn from(error: &str) -> Self {
        CliError::Engine(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_prefix() {
        let e = CliError::InvalidInput("bad card".into());
        assert_eq!(e.to_string(), "Invalid input: bad card");
        let e = CliError::Config("decks must be >= 1".into());
        assert_eq!(e.to_string(), "Configuration error: decks must be >= 1");
    }

    #[test]
    fn io_errors_convert_and_keep_a_source() {
        let e: CliError = std::io::Error::other("disk full").into();
        assert!(matches!(e, CliError::Io(_)));
        assert!(std::error::Error::source(&e).is_some());
    }
}
