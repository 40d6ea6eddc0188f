//! Tree slots, fruit and grid indices, and the Orchard facade.
//!
//! This crate provides:
//! - [`Fruit`] - A fruit with its owning tree handle
//! - [`TreeSlot`] - A planted tree's fruits, kept sorted by (ripeness, id)
//! - [`GlobalFruitIndex`] - Fruit id to owning tree, the uniqueness gate
//! - [`GridIndex`] - Planted positions and the tree arena
//! - [`Orchard`] - The facade that keeps both indices consistent

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fruit;
pub mod fruit_index;
pub mod grid;
pub mod orchard;
pub mod tree;

pub use fruit::Fruit;
pub use fruit_index::GlobalFruitIndex;
pub use grid::GridIndex;
pub use orchard::Orchard;
pub use tree::{SlotId, TreeSlot};
