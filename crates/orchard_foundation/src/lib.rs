//! Identifiers, error kinds, and status codes for Orchard.
//!
//! This crate provides:
//! - [`FruitId`], [`Ripeness`], [`Position`] - Validated value types
//! - [`RotRule`] - The condition and multiplier of a bulk ripeness rewrite
//! - [`Error`] - Error kinds with optional context
//! - [`StatusType`] - The four-outcome status code of the handle interface

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod status;
pub mod types;

pub use error::{Conflict, Error, ErrorContext, ErrorKind, InvalidArgument, Result};
pub use status::{NO_FRUIT, StatusType};
pub use types::{FruitId, Position, Ripeness, RotRule};
