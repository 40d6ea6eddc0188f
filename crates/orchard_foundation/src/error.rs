//! Error types for Orchard operations.
//!
//! Uses `thiserror` for error definition. Every failure falls into one of three
//! kinds, which map one-to-one onto the handle interface's status codes.

use std::fmt;

use thiserror::Error;

use crate::types::{FruitId, Position};

/// The main error type for Orchard operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid(reason: InvalidArgument) -> Self {
        Self::new(ErrorKind::InvalidArgument(reason))
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict(reason: Conflict) -> Self {
        Self::new(ErrorKind::Conflict(reason))
    }

    /// Creates a resource exhaustion error.
    #[must_use]
    pub fn exhausted(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResourceExhausted(what.into()))
    }

    /// Returns true if this is an `InvalidArgument` error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument(_))
    }

    /// Returns true if this is a `Conflict` error.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self.kind, ErrorKind::Conflict(_))
    }

    /// Returns true if this is a `ResourceExhausted` error.
    #[must_use]
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::ResourceExhausted(_))
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(err: std::collections::TryReserveError) -> Self {
        Self::exhausted(err.to_string())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A malformed argument: bad coordinates, non-positive values, no orchard.
    #[error("invalid argument: {0}")]
    InvalidArgument(InvalidArgument),

    /// A semantic conflict with the current state.
    #[error("conflict: {0}")]
    Conflict(Conflict),

    /// Memory could not be allocated.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),
}

/// The precise cause of an `InvalidArgument` error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// Coordinates outside `[0, extent)`.
    #[error("coordinates ({row}, {col}) outside a {extent}x{extent} grid")]
    Coordinates {
        /// The requested row.
        row: i32,
        /// The requested column.
        col: i32,
        /// The grid extent.
        extent: u32,
    },

    /// A fruit id that is not strictly positive.
    #[error("fruit id must be positive, got {0}")]
    FruitId(i32),

    /// A ripeness level that is not strictly positive.
    #[error("ripeness must be positive, got {0}")]
    Ripeness(i32),

    /// A rot base below one.
    #[error("rot base must be at least 1, got {0}")]
    RotBase(i32),

    /// A rot factor below one.
    #[error("rot factor must be at least 1, got {0}")]
    RotFactor(i32),

    /// A grid extent that is not strictly positive.
    #[error("grid extent must be positive, got {0}")]
    Extent(i32),

    /// An operation on a handle that holds no orchard.
    #[error("no orchard is open")]
    NoOrchard,
}

/// The precise cause of a `Conflict` error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Conflict {
    /// The position already holds a tree.
    #[error("a tree is already planted at {0}")]
    AlreadyPlanted(Position),

    /// The position holds no tree.
    #[error("no tree is planted at {0}")]
    NotPlanted(Position),

    /// The fruit id is already in use somewhere in the orchard.
    #[error("fruit {0} already exists")]
    DuplicateFruit(FruitId),

    /// The fruit id is not in use.
    #[error("fruit {0} does not exist")]
    UnknownFruit(FruitId),
}

/// Result type alias using Orchard's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation that failed.
    pub operation: Option<String>,
    /// Script or input name.
    pub source: Option<String>,
    /// Line number in the source (1-indexed).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = match (&self.source, self.line) {
            (Some(source), Some(line)) => Some(format!("at {source}:{line}")),
            (Some(source), None) => Some(format!("at {source}")),
            (None, Some(line)) => Some(format!("at line {line}")),
            (None, None) => None,
        };
        match (&self.operation, location) {
            (Some(op), Some(loc)) => write!(f, "in {op} {loc}"),
            (Some(op), None) => write!(f, "in {op}"),
            (None, Some(loc)) => write!(f, "{loc}"),
            (None, None) => Ok(()),
        }
    }
}
