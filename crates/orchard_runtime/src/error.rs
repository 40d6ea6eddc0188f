//! Errors raised outside the orchard itself: parsing, I/O, and the terminal.

use orchard_foundation::ErrorContext;
use thiserror::Error;

use crate::command::ParseError;

/// Errors from the runtime layer.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A command line could not be parsed.
    #[error("{context}: {error}")]
    Parse {
        /// What was wrong with the line.
        error: ParseError,
        /// Where the line came from.
        context: ErrorContext,
    },

    /// Reading a script or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// An orchard operation failed.
    #[error(transparent)]
    Orchard(#[from] orchard_foundation::Error),
}

impl From<rustyline::error::ReadlineError> for RuntimeError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        Self::Editor(err.to_string())
    }
}

/// Result type alias for the runtime layer.
pub type Result<T> = std::result::Result<T, RuntimeError>;
