use chestgrid_core::{linear_index_to_slot_key, ItemId, SectionName, SectionShape, SlotKey};
use serde::Serialize;

use crate::Slot;

/// Fixed-shape collection of slots belonging to one section.
///
/// Slots are stored in row-major order, so the slot at enumeration position
/// `i` always has key `linear_index_to_slot_key(i)`. The slot count is set
/// at construction and never changes; only occupants do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    name: SectionName,
    slots: Vec<Slot>,
}

/// One row of a section enumeration, as handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotView<'a> {
    /// Row-major position of the slot.
    pub index: usize,
    /// Key of the slot.
    pub key: SlotKey,
    /// Item in the slot, if any.
    pub occupant: Option<&'a ItemId>,
}

impl Section {
    /// Build an empty section with every slot of its shape.
    pub fn new(name: SectionName) -> Self {
        let slots = (0..name.shape().slot_count())
            .map(|index| Slot::empty(linear_index_to_slot_key(index)))
            .collect();
        Self { name, slots }
    }

    /// Which section this is.
    pub fn name(&self) -> SectionName {
        self.name
    }

    /// Grid shape of this section.
    pub fn shape(&self) -> SectionShape {
        self.name.shape()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false for the fixed chest-screen shapes.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in row-major order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Look up a slot by key. Keys outside the shape yield `None`.
    pub fn get(&self, key: SlotKey) -> Option<&Slot> {
        self.index_of(key).and_then(|index| self.slots.get(index))
    }

    /// Item in the keyed slot, if any.
    pub fn occupant(&self, key: SlotKey) -> Option<&ItemId> {
        self.get(key).and_then(Slot::occupant)
    }

    /// Key of the slot holding `item`, if it is in this section.
    pub fn position_of(&self, item: &ItemId) -> Option<SlotKey> {
        self.slots
            .iter()
            .find(|slot| slot.occupant() == Some(item))
            .map(Slot::key)
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Enumerate `(index, key, occupant)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = SlotView<'_>> + '_ {
        self.slots.iter().enumerate().map(|(index, slot)| SlotView {
            index,
            key: slot.key(),
            occupant: slot.occupant(),
        })
    }

    /// Set the keyed slot's occupant, returning whatever was there before.
    pub(crate) fn replace(&mut self, key: SlotKey, occupant: Option<ItemId>) -> Option<ItemId> {
        let index = self.index_of(key)?;
        self.slots.get_mut(index)?.replace(occupant)
    }

    pub(crate) fn take(&mut self, key: SlotKey) -> Option<ItemId> {
        let index = self.index_of(key)?;
        self.slots.get_mut(index)?.take()
    }

    // A key past the last column would otherwise alias a slot on the next row.
    fn index_of(&self, key: SlotKey) -> Option<usize> {
        self.shape()
            .contains(key.coordinate())
            .then(|| key.linear_index())
    }
}
