use chestgrid_core::{Coordinate, ItemId, SlotKey};
use serde::{Deserialize, Serialize};

/// A single grid cell: its key plus whatever item currently sits in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    key: SlotKey,
    occupant: Option<ItemId>,
}

impl Slot {
    /// Create an empty slot.
    pub fn empty(key: SlotKey) -> Self {
        Self {
            key,
            occupant: None,
        }
    }

    /// Key of this slot within its section.
    pub fn key(&self) -> SlotKey {
        self.key
    }

    /// Grid coordinate of this slot.
    pub fn coordinate(&self) -> Coordinate {
        self.key.coordinate()
    }

    /// Item in this slot, if any.
    pub fn occupant(&self) -> Option<&ItemId> {
        self.occupant.as_ref()
    }

    /// Returns true when nothing occupies the slot.
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Swap in a new occupant and hand back the previous one.
    pub(crate) fn replace(&mut self, occupant: Option<ItemId>) -> Option<ItemId> {
        std::mem::replace(&mut self.occupant, occupant)
    }

    pub(crate) fn take(&mut self) -> Option<ItemId> {
        self.occupant.take()
    }
}
