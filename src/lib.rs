//! Orchard - Indexed in-memory store of fruit-bearing trees on a fixed grid
//!
//! This crate re-exports all layers of the Orchard system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: orchard_runtime    — Command language, handle session, REPL, CLI
//! Layer 1: orchard_storage    — Trees, fruits, and the indexes over them
//! Layer 0: orchard_foundation — Core types (FruitId, Ripeness, Error, StatusType)
//! ```

pub use orchard_foundation as foundation;
pub use orchard_runtime as runtime;
pub use orchard_storage as storage;
