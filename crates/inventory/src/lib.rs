#![warn(missing_docs)]
//! Grid-addressed chest inventory: three fixed-shape sections (chest storage,
//! player inventory, hotbar), item moves between any two slots, and
//! copy-on-write snapshots of the whole aggregate.

mod history;
mod section;
mod seed;
mod slot;
mod state;
mod transfer;

pub use history::{InventoryHistory, DEFAULT_HISTORY_LIMIT};
pub use section::{Section, SlotView};
pub use seed::{InventorySeed, SeedEntry, SeedError};
pub use slot::Slot;
pub use state::{InventoryState, OccupiedSlot};
pub use transfer::{DragStart, DropTarget, MoveOutcome, MoveRequest, SlotRef, Transfer};

pub use chestgrid_core::{Coordinate, GridError, ItemId, SectionName, SlotKey};
