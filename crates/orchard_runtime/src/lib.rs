//! Command language, handle session, REPL, and CLI for Orchard.
//!
//! This crate provides:
//! - [`Command`] - One line of the orchard command language
//! - [`Session`] - A handle that may or may not hold an open [`Orchard`]
//! - [`script`] - Running command files against a session
//! - [`Repl`] - Interactive read-eval-print loop
//!
//! [`Orchard`]: orchard_storage::Orchard

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod repl;
pub mod script;
pub mod session;

pub use command::{Command, ParseError};
pub use config::ReplConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use error::{Result, RuntimeError};
pub use repl::Repl;
pub use script::ScriptSummary;
pub use session::{Outcome, Output, Session};
