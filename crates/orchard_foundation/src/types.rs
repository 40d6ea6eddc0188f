//! Validated value types shared by every layer.
//!
//! The handle interface speaks in signed integers. Each type here has a
//! checked constructor that turns a raw argument into a value that can no
//! longer be out of range, so the storage layer never re-validates.

use std::fmt;

use crate::error::{Error, InvalidArgument, Result};

/// Globally unique, strictly positive fruit identifier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FruitId(u32);

impl FruitId {
    /// Validates a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `raw <= 0`.
    pub fn new(raw: i32) -> Result<Self> {
        u32::try_from(raw)
            .ok()
            .filter(|&id| id > 0)
            .map(Self)
            .ok_or_else(|| Error::invalid(InvalidArgument::FruitId(raw)))
    }

    /// Returns the identifier as an unsigned integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the identifier in the signed form used by the handle interface.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn raw(self) -> i32 {
        // Constructed only from positive i32 values.
        self.0 as i32
    }
}

impl fmt::Display for FruitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ripeness level of a fruit; the primary sort key within a tree.
///
/// Stored wider than the input type so repeated rotting multiplies without
/// wrapping. Multiplication saturates at [`Ripeness::MAX`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Ripeness(u64);

impl Ripeness {
    /// The ceiling that scaling saturates at.
    pub const MAX: Self = Self(u64::MAX);

    /// Validates a raw ripeness level.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `raw <= 0`.
    pub fn new(raw: i32) -> Result<Self> {
        u64::try_from(raw)
            .ok()
            .filter(|&r| r > 0)
            .map(Self)
            .ok_or_else(|| Error::invalid(InvalidArgument::Ripeness(raw)))
    }

    /// Returns the ripeness as an unsigned integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Multiplies by `factor`, returning `None` on overflow.
    #[must_use]
    pub fn checked_scale(self, factor: u32) -> Option<Self> {
        self.0.checked_mul(u64::from(factor)).map(Self)
    }
}

impl fmt::Display for Ripeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated `(row, col)` cell of an `N x N` grid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    /// Row, in `[0, N)`.
    pub row: u32,
    /// Column, in `[0, N)`.
    pub col: u32,
}

impl Position {
    /// Validates raw coordinates against the grid extent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either coordinate is outside `[0, extent)`.
    pub fn checked(row: i32, col: i32, extent: u32) -> Result<Self> {
        let in_range = |v: i32| u32::try_from(v).ok().filter(|&v| v < extent);
        match (in_range(row), in_range(col)) {
            (Some(row), Some(col)) => Ok(Self { row, col }),
            _ => Err(Error::invalid(InvalidArgument::Coordinates {
                row,
                col,
                extent,
            })),
        }
    }

    /// Linear encoding `row * extent + col`.
    #[must_use]
    pub fn linear(self, extent: u32) -> u64 {
        u64::from(self.row) * u64::from(extent) + u64::from(self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Condition and multiplier of a bulk ripeness rewrite.
///
/// A fruit is rotten under this rule iff `id mod base == 0`; its ripeness is
/// then multiplied by `factor`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RotRule {
    base: u32,
    factor: u32,
}

impl RotRule {
    /// Validates the rule's arguments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `base < 1` or `factor < 1`.
    pub fn new(base: i32, factor: i32) -> Result<Self> {
        let base = u32::try_from(base)
            .ok()
            .filter(|&b| b >= 1)
            .ok_or_else(|| Error::invalid(InvalidArgument::RotBase(base)))?;
        let factor = u32::try_from(factor)
            .ok()
            .filter(|&f| f >= 1)
            .ok_or_else(|| Error::invalid(InvalidArgument::RotFactor(factor)))?;
        Ok(Self { base, factor })
    }

    /// Returns true if the fruit with this id is affected.
    #[must_use]
    pub const fn matches(self, id: FruitId) -> bool {
        id.get() % self.base == 0
    }

    /// Applies the multiplier, returning `None` on overflow.
    #[must_use]
    pub fn scale(self, ripeness: Ripeness) -> Option<Ripeness> {
        ripeness.checked_scale(self.factor)
    }
}
