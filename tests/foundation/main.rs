//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: FruitId, Ripeness, Position, RotRule, Error, and
//! StatusType.

mod types;
