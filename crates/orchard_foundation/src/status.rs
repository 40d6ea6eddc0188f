//! Status codes of the handle interface.
//!
//! Callers outside Rust see four outcomes. Each [`ErrorKind`] maps onto exactly
//! one of them.

use std::fmt;

use crate::error::{ErrorKind, Result};

/// Fruit id reported for a planted tree that bears no fruit.
pub const NO_FRUIT: i32 = -1;

/// Outcome of a handle-level call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StatusType {
    /// The call completed.
    Success,
    /// A semantic conflict: duplicate or absent tree or fruit.
    Failure,
    /// Memory could not be allocated.
    AllocationError,
    /// Malformed arguments or a null handle.
    InvalidInput,
}

impl StatusType {
    /// Returns the numeric status code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => -1,
            Self::AllocationError => -2,
            Self::InvalidInput => -3,
        }
    }

    /// Returns the status for a numeric code, if it is one.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            -1 => Some(Self::Failure),
            -2 => Some(Self::AllocationError),
            -3 => Some(Self::InvalidInput),
            _ => None,
        }
    }

    /// Collapses a result into its status.
    #[must_use]
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(e) => Self::from(&e.kind),
        }
    }

    /// Returns true for [`StatusType::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<&ErrorKind> for StatusType {
    fn from(kind: &ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidArgument(_) => Self::InvalidInput,
            ErrorKind::Conflict(_) => Self::Failure,
            ErrorKind::ResourceExhausted(_) => Self::AllocationError,
        }
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
            Self::AllocationError => "ALLOCATION_ERROR",
            Self::InvalidInput => "INVALID_INPUT",
        };
        f.write_str(name)
    }
}
