//! The fruit entity.

use std::cmp::Ordering;

use orchard_foundation::{FruitId, Ripeness};

use crate::tree::SlotId;

/// A fruit hanging on a planted tree.
///
/// Owned by its [`TreeSlot`](crate::TreeSlot). The `tree` field is a stable
/// handle to that slot, not a reference, so moving fruits between buffers
/// never invalidates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fruit {
    id: FruitId,
    ripeness: Ripeness,
    tree: SlotId,
}

impl Fruit {
    /// Creates a fruit owned by the given tree.
    #[must_use]
    pub const fn new(id: FruitId, ripeness: Ripeness, tree: SlotId) -> Self {
        Self { id, ripeness, tree }
    }

    /// Returns the fruit's id.
    #[must_use]
    pub const fn id(&self) -> FruitId {
        self.id
    }

    /// Returns the current ripeness.
    #[must_use]
    pub const fn ripeness(&self) -> Ripeness {
        self.ripeness
    }

    /// Returns the handle of the owning tree.
    #[must_use]
    pub const fn tree(&self) -> SlotId {
        self.tree
    }

    /// The key a tree sorts its fruits by.
    #[must_use]
    pub const fn sort_key(&self) -> (Ripeness, FruitId) {
        (self.ripeness, self.id)
    }

    /// Compares two fruits by (ripeness, id).
    #[must_use]
    pub fn cmp_by_rate(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    pub(crate) fn set_ripeness(&mut self, ripeness: Ripeness) {
        self.ripeness = ripeness;
    }
}
