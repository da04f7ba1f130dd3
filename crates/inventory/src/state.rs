//! The aggregate chest-screen state.
//!
//! An [`InventoryState`] is an immutable value. Each section sits behind an
//! `Arc`, so deriving a new state clones only the sections a move touches and
//! shares the rest. Holders of an older state never observe later moves.

use std::collections::BTreeSet;
use std::sync::Arc;

use chestgrid_core::{Coordinate, GridError, ItemId, SectionName};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{InventorySeed, Section, SeedEntry, SlotRef};

/// Storage, inventory and hotbar sections taken together.
///
/// Every item appears in at most one slot across all three sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryState {
    storage: Arc<Section>,
    inventory: Arc<Section>,
    hotbar: Arc<Section>,
}

/// Flat description of one occupied slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedSlot {
    /// Section holding the item.
    pub section: SectionName,
    /// Row of the slot.
    pub row: u8,
    /// Column of the slot.
    pub column: u8,
    /// The item.
    pub item: ItemId,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::empty()
    }
}

impl InventoryState {
    /// All slots empty.
    pub fn empty() -> Self {
        Self {
            storage: Arc::new(Section::new(SectionName::Storage)),
            inventory: Arc::new(Section::new(SectionName::Inventory)),
            hotbar: Arc::new(Section::new(SectionName::Hotbar)),
        }
    }

    /// Build a state from a seed.
    ///
    /// Rejects coordinates outside a section's shape, two entries for one
    /// slot, and any item listed more than once.
    pub fn from_seed(seed: &InventorySeed) -> Result<Self, GridError> {
        let mut state = Self::empty();
        let mut seen: BTreeSet<&ItemId> = BTreeSet::new();

        for section in SectionName::ALL {
            for entry in seed.entries(section) {
                let slot = SlotRef::new(section, Coordinate::new(entry.row, entry.column))?;
                if !seen.insert(&entry.item) {
                    return Err(GridError::DuplicateItem(entry.item.to_string()));
                }
                let previous = state
                    .section_mut(section)
                    .replace(slot.key(), Some(entry.item.clone()));
                if previous.is_some() {
                    return Err(GridError::SlotAlreadySeeded {
                        section,
                        key: slot.key(),
                    });
                }
            }
        }

        debug!(items = seed.len(), "seeded inventory state");
        Ok(state)
    }

    /// Describe the current contents as a seed, e.g. for persistence.
    pub fn to_seed(&self) -> InventorySeed {
        let mut seed = InventorySeed::default();
        for occupied in self.occupied() {
            seed.entries_mut(occupied.section).push(SeedEntry::new(
                occupied.row,
                occupied.column,
                occupied.item,
            ));
        }
        seed
    }

    /// Read-only view of one section, enumerated row-major.
    pub fn section(&self, name: SectionName) -> &Section {
        match name {
            SectionName::Storage => &self.storage,
            SectionName::Inventory => &self.inventory,
            SectionName::Hotbar => &self.hotbar,
        }
    }

    /// All three sections in display order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> + '_ {
        SectionName::ALL.into_iter().map(move |name| self.section(name))
    }

    /// Item in the referenced slot, if any.
    pub fn occupant(&self, slot: SlotRef) -> Option<&ItemId> {
        self.section(slot.section()).occupant(slot.key())
    }

    /// Find the slot currently holding `item`.
    pub fn locate(&self, item: &ItemId) -> Option<SlotRef> {
        self.sections().find_map(|section| {
            section
                .position_of(item)
                .map(|key| SlotRef::from_valid_key(section.name(), key))
        })
    }

    /// Every occupied slot, section by section in row-major order.
    pub fn occupied(&self) -> Vec<OccupiedSlot> {
        self.sections()
            .flat_map(|section| {
                section.iter().filter_map(move |view| {
                    view.occupant.map(|item| OccupiedSlot {
                        section: section.name(),
                        row: view.key.coordinate().row,
                        column: view.key.coordinate().column,
                        item: item.clone(),
                    })
                })
            })
            .collect()
    }

    /// Number of items held across all sections.
    pub fn item_count(&self) -> usize {
        self.sections().map(Section::occupied_count).sum()
    }

    /// True when both states share every section allocation.
    ///
    /// Shared storage implies equal contents; the converse does not hold, so
    /// renderers can use this as a cheap "nothing changed" check.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        SectionName::ALL
            .into_iter()
            .all(|name| self.shares_section_with(other, name))
    }

    /// True when `name` is the same allocation in both states.
    pub fn shares_section_with(&self, other: &Self, name: SectionName) -> bool {
        Arc::ptr_eq(self.section_arc(name), other.section_arc(name))
    }

    fn section_arc(&self, name: SectionName) -> &Arc<Section> {
        match name {
            SectionName::Storage => &self.storage,
            SectionName::Inventory => &self.inventory,
            SectionName::Hotbar => &self.hotbar,
        }
    }

    /// Copy-on-write access to one section.
    pub(crate) fn section_mut(&mut self, name: SectionName) -> &mut Section {
        let section = match name {
            SectionName::Storage => &mut self.storage,
            SectionName::Inventory => &mut self.inventory,
            SectionName::Hotbar => &mut self.hotbar,
        };
        Arc::make_mut(section)
    }
}
