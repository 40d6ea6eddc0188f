//! Planted positions and the arena that owns every tree.
//!
//! Positions are keyed by their linear encoding `row * N + col`. An absent
//! key means the position is unplanted. Trees are appended to the arena when
//! planted and never removed, so [`SlotId`] handles stay valid.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use orchard_foundation::{Conflict, Error, Position, Result};

use crate::tree::{SlotId, TreeSlot};

/// Sparse map of an `N x N` grid to the trees planted on it.
#[derive(Clone, Debug)]
pub struct GridIndex {
    /// Grid extent `N`.
    extent: u32,
    /// Tree arena, indexed by `SlotId`.
    trees: Vec<TreeSlot>,
    /// Linear position -> tree handle.
    by_position: BTreeMap<u64, SlotId>,
}

impl GridIndex {
    /// Creates an empty grid of the given extent.
    #[must_use]
    pub fn new(extent: u32) -> Self {
        Self {
            extent,
            trees: Vec::new(),
            by_position: BTreeMap::new(),
        }
    }

    /// Returns the grid extent `N`.
    #[must_use]
    pub const fn extent(&self) -> u32 {
        self.extent
    }

    /// Returns the number of planted trees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Returns true if nothing is planted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Validates raw coordinates against this grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either coordinate is outside `[0, N)`.
    pub fn locate(&self, row: i32, col: i32) -> Result<Position> {
        Position::checked(row, col, self.extent)
    }

    /// Plants a tree, returning its handle.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the position is already planted, or
    /// `ResourceExhausted` if the arena cannot grow.
    pub fn plant(&mut self, position: Position) -> Result<SlotId> {
        match self.by_position.entry(position.linear(self.extent)) {
            Entry::Occupied(_) => Err(Error::conflict(Conflict::AlreadyPlanted(position))),
            Entry::Vacant(entry) => {
                self.trees.try_reserve(1)?;
                let id = SlotId::new(self.trees.len());
                self.trees.push(TreeSlot::new(id, position));
                entry.insert(id);
                Ok(id)
            }
        }
    }

    /// Returns the handle of the tree at a position, if planted.
    #[must_use]
    pub fn slot_at(&self, position: Position) -> Option<SlotId> {
        self.by_position
            .get(&position.linear(self.extent))
            .copied()
    }

    /// Returns the handle of the tree at a position.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the position is unplanted.
    pub fn require(&self, position: Position) -> Result<SlotId> {
        self.slot_at(position)
            .ok_or_else(|| Error::conflict(Conflict::NotPlanted(position)))
    }

    /// Returns the tree at a position, if planted.
    #[must_use]
    pub fn tree_at(&self, position: Position) -> Option<&TreeSlot> {
        self.slot_at(position).map(|id| self.tree(id))
    }

    /// Returns the tree behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was minted by a different grid.
    #[must_use]
    pub fn tree(&self, id: SlotId) -> &TreeSlot {
        &self.trees[id.index()]
    }

    /// Returns the tree behind a handle, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the handle was minted by a different grid.
    pub fn tree_mut(&mut self, id: SlotId) -> &mut TreeSlot {
        &mut self.trees[id.index()]
    }

    /// Iterates over planted trees in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = &TreeSlot> + '_ {
        self.by_position.values().map(|&id| self.tree(id))
    }

    /// Iterates mutably over planted trees in planting order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TreeSlot> + '_ {
        self.trees.iter_mut()
    }
}
