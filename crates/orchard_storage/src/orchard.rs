//! The Orchard facade.
//!
//! Composes the [`GridIndex`] and the [`GlobalFruitIndex`] and keeps them
//! consistent: every live fruit sits in exactly one tree and has exactly one
//! index entry naming that tree. Every operation validates all of its
//! arguments before touching either index, so a failed call leaves the
//! orchard unchanged.

use orchard_foundation::{
    Conflict, Error, ErrorContext, FruitId, InvalidArgument, Position, Result, Ripeness, RotRule,
};
use tracing::{debug, trace};

use crate::fruit::Fruit;
use crate::fruit_index::GlobalFruitIndex;
use crate::grid::GridIndex;
use crate::tree::TreeSlot;

/// An `N x N` grid of trees and the fruits they bear.
#[derive(Clone, Debug)]
pub struct Orchard {
    /// Planted positions and the tree arena.
    grid: GridIndex,
    /// Fruit id -> owning tree.
    fruits: GlobalFruitIndex,
}

impl Orchard {
    /// Creates an empty orchard over an `extent x extent` grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `extent <= 0`.
    pub fn new(extent: i32) -> Result<Self> {
        let extent = u32::try_from(extent)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| Error::invalid(InvalidArgument::Extent(extent)))?;
        debug!(extent, "orchard created");
        Ok(Self {
            grid: GridIndex::new(extent),
            fruits: GlobalFruitIndex::new(),
        })
    }

    /// Returns the grid extent `N`.
    #[must_use]
    pub const fn extent(&self) -> u32 {
        self.grid.extent()
    }

    /// Returns the number of planted trees.
    #[must_use]
    pub fn tree_count(&self) -> usize {
        self.grid.len()
    }

    /// Returns the number of live fruits.
    #[must_use]
    pub fn fruit_count(&self) -> usize {
        self.fruits.len()
    }

    /// Plants a tree at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the coordinates are outside the grid
    /// - `Conflict` if a tree is already planted there
    pub fn plant_tree(&mut self, row: i32, col: i32) -> Result<()> {
        traced("PlantTree", self.plant(row, col))
    }

    fn plant(&mut self, row: i32, col: i32) -> Result<()> {
        let position = self.grid.locate(row, col)?;
        let slot = self.grid.plant(position)?;
        debug!(%position, %slot, "tree planted");
        Ok(())
    }

    /// Hangs a new fruit on the tree at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the coordinates are outside the grid, or
    ///   `id <= 0`, or `ripeness <= 0`
    /// - `Conflict` if no tree is planted there, or `id` is already in use
    ///   anywhere in the orchard
    /// - `ResourceExhausted` if the tree's fruit list cannot grow
    pub fn add_fruit(&mut self, row: i32, col: i32, id: i32, ripeness: i32) -> Result<()> {
        traced("AddFruit", self.add(row, col, id, ripeness))
    }

    fn add(&mut self, row: i32, col: i32, id: i32, ripeness: i32) -> Result<()> {
        let position = self.grid.locate(row, col)?;
        let id = FruitId::new(id)?;
        let ripeness = Ripeness::new(ripeness)?;

        // The tree is checked before anything is built for it.
        let slot = self.grid.require(position)?;
        self.fruits.ensure_vacant(id)?;

        let tree = self.grid.tree_mut(slot);
        tree.reserve_one()?;
        self.fruits.register(id, slot)?;
        tree.insert(Fruit::new(id, ripeness, slot));

        debug!(%id, %ripeness, %position, "fruit added");
        Ok(())
    }

    /// Removes a fruit from whichever tree bears it, returning it.
    ///
    /// The id becomes free for reuse.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `id <= 0`
    /// - `Conflict` if no fruit has this id
    pub fn pick_fruit(&mut self, id: i32) -> Result<Fruit> {
        traced("PickFruit", self.pick(id))
    }

    fn pick(&mut self, id: i32) -> Result<Fruit> {
        let id = FruitId::new(id)?;
        let slot = self.fruits.owner_of(id)?;

        let fruit = self.grid.tree_mut(slot).remove(id);
        debug_assert!(fruit.is_some(), "index names {slot} for fruit {id}");
        let fruit = fruit.ok_or_else(|| Error::conflict(Conflict::UnknownFruit(id)))?;
        self.fruits.unregister(id);

        debug!(%id, %slot, "fruit picked");
        Ok(fruit)
    }

    /// Sets a fruit's ripeness and moves it to its new place in its tree.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `id <= 0` or `ripeness <= 0`
    /// - `Conflict` if no fruit has this id
    pub fn rate_fruit(&mut self, id: i32, ripeness: i32) -> Result<()> {
        traced("RateFruit", self.rate(id, ripeness))
    }

    fn rate(&mut self, id: i32, ripeness: i32) -> Result<()> {
        let id = FruitId::new(id)?;
        let ripeness = Ripeness::new(ripeness)?;
        let slot = self.fruits.owner_of(id)?;

        let previous = self.grid.tree_mut(slot).rerate(id, ripeness);
        debug_assert!(previous.is_some(), "index names {slot} for fruit {id}");

        debug!(%id, ?previous, %ripeness, "fruit rerated");
        Ok(())
    }

    /// Returns the first fruit of the tree at `(row, col)` in ascending
    /// (ripeness, id) order, or `None` if the tree bears no fruit.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the coordinates are outside the grid
    /// - `Conflict` if no tree is planted there
    pub fn best_fruit(&self, row: i32, col: i32) -> Result<Option<FruitId>> {
        traced(
            "GetBestFruit",
            self.tree(row, col).map(|tree| tree.best().map(Fruit::id)),
        )
    }

    /// Returns the ids of every fruit on the tree at `(row, col)` in
    /// ascending (ripeness, id) order.
    ///
    /// The returned vector is a copy owned by the caller.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the coordinates are outside the grid
    /// - `Conflict` if no tree is planted there
    /// - `ResourceExhausted` if the output cannot be allocated
    pub fn fruits_by_rate(&self, row: i32, col: i32) -> Result<Vec<FruitId>> {
        traced(
            "GetAllFruitsByRate",
            self.tree(row, col).and_then(TreeSlot::ids_by_rate),
        )
    }

    /// Multiplies by `factor` the ripeness of every fruit whose id is
    /// divisible by `base`, on every tree. Returns how many fruits changed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `base < 1` or `factor < 1`.
    pub fn update_rotten_fruits(&mut self, base: i32, factor: i32) -> Result<usize> {
        traced("UpdateRottenFruits", self.rot(base, factor))
    }

    fn rot(&mut self, base: i32, factor: i32) -> Result<usize> {
        let rule = RotRule::new(base, factor)?;
        let count: usize = self.grid.iter_mut().map(|tree| tree.rot(rule)).sum();
        debug!(base, factor, count, "rotten fruits updated");
        Ok(count)
    }

    /// Returns the tree at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the coordinates are outside the grid
    /// - `Conflict` if no tree is planted there
    pub fn tree(&self, row: i32, col: i32) -> Result<&TreeSlot> {
        let position = self.grid.locate(row, col)?;
        let slot = self.grid.require(position)?;
        trace!(%position, %slot, "tree lookup");
        Ok(self.grid.tree(slot))
    }

    /// Returns true if a tree is planted at `position`.
    #[must_use]
    pub fn is_planted(&self, position: Position) -> bool {
        self.grid.slot_at(position).is_some()
    }

    /// Finds a live fruit by id.
    #[must_use]
    pub fn fruit(&self, id: FruitId) -> Option<&Fruit> {
        let slot = self.fruits.owner(id)?;
        self.grid.tree(slot).get(id)
    }

    /// Iterates over planted trees in ascending position order.
    pub fn trees(&self) -> impl Iterator<Item = &TreeSlot> + '_ {
        self.grid.iter()
    }

    /// Checks every cross-index invariant.
    ///
    /// - each tree's fruits are strictly ascending by (ripeness, id)
    /// - each fruit names the tree that holds it
    /// - each fruit has exactly one index entry, naming that tree
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut held = 0;
        for tree in self.grid.iter() {
            if !tree.is_ordered() {
                return false;
            }
            for fruit in tree.iter() {
                if fruit.tree() != tree.id() || self.fruits.owner(fruit.id()) != Some(tree.id()) {
                    return false;
                }
                held += 1;
            }
        }
        held == self.fruits.len()
    }
}

/// Logs a rejection and tags it with the failing operation.
fn traced<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    result.map_err(|err| {
        debug!(operation, error = %err, "operation rejected");
        err.with_context(ErrorContext::new().with_operation(operation))
    })
}
