//! A planted tree and the ordered list of fruits it bears.
//!
//! The fruit list is kept sorted ascending by ripeness, ties broken by
//! ascending id. Every mutating method re-establishes that order before it
//! returns.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use orchard_foundation::{FruitId, Position, Result, Ripeness, RotRule};

use crate::fruit::Fruit;

/// Stable handle to a tree in the grid's arena.
///
/// Trees are never removed, so a handle stays valid for the orchard's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(usize);

impl SlotId {
    /// Creates a handle for the given arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// The fruits of one planted position.
#[derive(Clone, Debug)]
pub struct TreeSlot {
    id: SlotId,
    position: Position,
    fruits: Vec<Fruit>,
}

impl TreeSlot {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new(id: SlotId, position: Position) -> Self {
        Self {
            id,
            position,
            fruits: Vec::new(),
        }
    }

    /// Returns this tree's arena handle.
    #[must_use]
    pub const fn id(&self) -> SlotId {
        self.id
    }

    /// Returns the grid position the tree is planted at.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the number of fruits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    /// Returns true if the tree bears no fruit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }

    /// Iterates over the fruits in (ripeness, id) order.
    pub fn iter(&self) -> impl Iterator<Item = &Fruit> + '_ {
        self.fruits.iter()
    }

    /// The first fruit in (ripeness, id) order.
    #[must_use]
    pub fn best(&self) -> Option<&Fruit> {
        self.fruits.first()
    }

    /// Finds a fruit by id.
    #[must_use]
    pub fn get(&self, id: FruitId) -> Option<&Fruit> {
        self.fruits.iter().find(|f| f.id() == id)
    }

    /// Makes room for one more fruit.
    ///
    /// Call before registering a new fruit anywhere else, so a failed
    /// allocation leaves the orchard untouched.
    ///
    /// # Errors
    ///
    /// Returns `ResourceExhausted` if the allocation fails.
    pub fn reserve_one(&mut self) -> Result<()> {
        self.fruits.try_reserve(1)?;
        Ok(())
    }

    /// Inserts a fruit before the first fruit it sorts ahead of.
    pub fn insert(&mut self, fruit: Fruit) {
        debug_assert_eq!(fruit.tree(), self.id);
        let at = self
            .fruits
            .partition_point(|f| f.cmp_by_rate(&fruit) == Ordering::Less);
        self.fruits.insert(at, fruit);
    }

    /// Removes a fruit by id.
    pub fn remove(&mut self, id: FruitId) -> Option<Fruit> {
        let at = self.fruits.iter().position(|f| f.id() == id)?;
        Some(self.fruits.remove(at))
    }

    /// Changes a fruit's ripeness and moves it to its new place.
    ///
    /// Returns the previous ripeness, or `None` if the fruit is not here.
    pub fn rerate(&mut self, id: FruitId, ripeness: Ripeness) -> Option<Ripeness> {
        let mut fruit = self.remove(id)?;
        let previous = fruit.ripeness();
        fruit.set_ripeness(ripeness);
        self.insert(fruit);
        Some(previous)
    }

    /// Multiplies the ripeness of every fruit the rule matches.
    ///
    /// Matching fruits are split off, rescaled, and merged back into the
    /// untouched ones. Scaling by a positive factor keeps the split-off run
    /// sorted, so no full re-sort is needed. Returns the number of fruits
    /// rescaled.
    pub fn rot(&mut self, rule: RotRule) -> usize {
        if !self.fruits.iter().any(|f| rule.matches(f.id())) {
            return 0;
        }

        let (mut rotten, fresh): (Vec<Fruit>, Vec<Fruit>) = mem::take(&mut self.fruits)
            .into_iter()
            .partition(|f| rule.matches(f.id()));

        let mut saturated = false;
        for fruit in &mut rotten {
            let scaled = rule.scale(fruit.ripeness()).unwrap_or_else(|| {
                saturated = true;
                Ripeness::MAX
            });
            fruit.set_ripeness(scaled);
        }
        // Saturation collapses distinct levels, which can reorder ids.
        if saturated {
            rotten.sort_by(Fruit::cmp_by_rate);
        }

        let count = rotten.len();
        self.fruits = merge(fresh, rotten);
        debug_assert!(self.is_ordered());
        count
    }

    /// Copies the fruit ids out in (ripeness, id) order.
    ///
    /// # Errors
    ///
    /// Returns `ResourceExhausted` if the output buffer cannot be allocated.
    pub fn ids_by_rate(&self) -> Result<Vec<FruitId>> {
        let mut ids = Vec::new();
        ids.try_reserve_exact(self.fruits.len())?;
        ids.extend(self.fruits.iter().map(Fruit::id));
        Ok(ids)
    }

    /// Returns true if the fruits are strictly ascending by (ripeness, id).
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.fruits.is_sorted_by(|a, b| a.cmp_by_rate(b) == Ordering::Less)
    }
}

/// Stable merge of two sorted runs; on equal keys `left` goes first.
fn merge(left: Vec<Fruit>, right: Vec<Fruit>) -> Vec<Fruit> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.cmp_by_rate(r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }

    merged
}
