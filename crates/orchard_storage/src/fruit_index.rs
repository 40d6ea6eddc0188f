//! Fruit id to owning tree.
//!
//! The only place fruit id uniqueness is decided. Keyed by value, so lookups
//! never depend on where the fruit currently sits in its tree's list.

use std::collections::BTreeMap;

use orchard_foundation::{Conflict, Error, FruitId, Result};

use crate::tree::SlotId;

/// Ordered map from every live fruit id to the tree that owns it.
#[derive(Clone, Debug, Default)]
pub struct GlobalFruitIndex {
    owners: BTreeMap<FruitId, SlotId>,
}

impl GlobalFruitIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live fruits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Returns true if no fruit is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Returns true if the id is in use.
    #[must_use]
    pub fn contains(&self, id: FruitId) -> bool {
        self.owners.contains_key(&id)
    }

    /// Returns the tree owning the fruit, if it exists.
    #[must_use]
    pub fn owner(&self, id: FruitId) -> Option<SlotId> {
        self.owners.get(&id).copied()
    }

    /// Returns the tree owning the fruit.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the id is not in use.
    pub fn owner_of(&self, id: FruitId) -> Result<SlotId> {
        self.owner(id)
            .ok_or_else(|| Error::conflict(Conflict::UnknownFruit(id)))
    }

    /// Checks that the id is free.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the id is already in use.
    pub fn ensure_vacant(&self, id: FruitId) -> Result<()> {
        if self.contains(id) {
            return Err(Error::conflict(Conflict::DuplicateFruit(id)));
        }
        Ok(())
    }

    /// Records a new fruit and its owner.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the id is already in use.
    pub fn register(&mut self, id: FruitId, owner: SlotId) -> Result<()> {
        self.ensure_vacant(id)?;
        self.owners.insert(id, owner);
        Ok(())
    }

    /// Forgets a fruit, returning its former owner.
    pub fn unregister(&mut self, id: FruitId) -> Option<SlotId> {
        self.owners.remove(&id)
    }

    /// Iterates over `(id, owner)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (FruitId, SlotId)> + '_ {
        self.owners.iter().map(|(&id, &owner)| (id, owner))
    }
}
