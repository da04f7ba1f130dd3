//! Initial inventory contents.
//!
//! A seed lists occupied slots per section; everything else starts empty.
//! Seeds are plain JSON so a chest can be persisted and reloaded:
//!
//! ```json
//! { "storage": [{ "row": 0, "column": 0, "item": "diamond" }], "hotbar": [] }
//! ```

use std::fs;
use std::path::Path;

use chestgrid_core::{ItemId, SectionName};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors emitted while loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Wrap IO errors when reading seeds.
    #[error("failed to read inventory seed: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse inventory seed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One pre-filled slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    /// Row of the slot.
    pub row: u8,
    /// Column of the slot.
    pub column: u8,
    /// Item placed in the slot.
    pub item: ItemId,
}

impl SeedEntry {
    /// Create an entry.
    pub fn new(row: u8, column: u8, item: ItemId) -> Self {
        Self { row, column, item }
    }
}

/// Occupied slots for each section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventorySeed {
    /// Chest storage entries.
    pub storage: Vec<SeedEntry>,
    /// Player inventory entries.
    pub inventory: Vec<SeedEntry>,
    /// Hotbar entries.
    pub hotbar: Vec<SeedEntry>,
}

impl InventorySeed {
    /// Entries for one section.
    pub fn entries(&self, section: SectionName) -> &[SeedEntry] {
        match section {
            SectionName::Storage => &self.storage,
            SectionName::Inventory => &self.inventory,
            SectionName::Hotbar => &self.hotbar,
        }
    }

    /// Mutable entries for one section.
    pub fn entries_mut(&mut self, section: SectionName) -> &mut Vec<SeedEntry> {
        match section {
            SectionName::Storage => &mut self.storage,
            SectionName::Inventory => &mut self.inventory,
            SectionName::Hotbar => &mut self.hotbar,
        }
    }

    /// Builder-style helper that appends one entry.
    pub fn with(mut self, section: SectionName, row: u8, column: u8, item: ItemId) -> Self {
        self.entries_mut(section)
            .push(SeedEntry::new(row, column, item));
        self
    }

    /// Total number of seeded items.
    pub fn len(&self) -> usize {
        self.storage.len() + self.inventory.len() + self.hotbar.len()
    }

    /// Returns true when no slot is seeded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a seed from JSON.
    pub fn from_json_str(input: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a seed from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize the seed as pretty JSON.
    pub fn to_json_string(&self) -> Result<String, SeedError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A small chest with a few items spread over all three sections.
    pub fn demo() -> Self {
        const DEMO: [(SectionName, u8, u8, &str); 8] = [
            (SectionName::Storage, 0, 0, "diamond"),
            (SectionName::Storage, 0, 4, "iron_ingot"),
            (SectionName::Storage, 1, 2, "oak_planks"),
            (SectionName::Storage, 2, 8, "gold_ingot"),
            (SectionName::Inventory, 0, 1, "bread"),
            (SectionName::Inventory, 1, 2, "apple"),
            (SectionName::Hotbar, 0, 0, "stone_sword"),
            (SectionName::Hotbar, 0, 1, "torch"),
        ];

        DEMO.iter()
            .fold(Self::default(), |seed, &(section, row, column, item)| {
                let item = ItemId::parse(item).expect("demo item ids are valid");
                seed.with(section, row, column, item)
            })
    }
}
