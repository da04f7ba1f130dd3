//! Section identifiers and grid shapes.
//!
//! A chest screen is split into three sections: the chest's own storage, the
//! player's main inventory, and the hotbar. Each has its own coordinate space
//! but shares the slot key convention from [`crate::coord`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Coordinate, GridError, GRID_WIDTH};

/// Stable identifier for one of the three inventory sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SectionName {
    /// The chest's own storage.
    #[serde(alias = "chest", alias = "chestState")]
    Storage = 0,
    /// The player's main inventory.
    #[serde(alias = "inventoryState")]
    Inventory = 1,
    /// The player's hotbar.
    #[serde(alias = "hotBarState")]
    Hotbar = 2,
}

impl SectionName {
    /// All sections, in the order they are displayed top to bottom.
    pub const ALL: [Self; 3] = [Self::Storage, Self::Inventory, Self::Hotbar];

    /// Convert to a stable numeric representation.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Try to convert from the stable numeric representation.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Storage),
            1 => Some(Self::Inventory),
            2 => Some(Self::Hotbar),
            _ => None,
        }
    }

    /// Canonical string key used in configs/logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::Inventory => "inventory",
            Self::Hotbar => "hotbar",
        }
    }

    /// Fixed grid shape of this section.
    pub const fn shape(self) -> SectionShape {
        match self {
            Self::Storage | Self::Inventory => SectionShape::new(3, GRID_WIDTH),
            Self::Hotbar => SectionShape::new(1, GRID_WIDTH),
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionName {
    type Err = GridError;

    /// Accepts canonical names plus the state keys used by the web chest UI.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "storage" | "chest" | "chestState" => Ok(Self::Storage),
            "inventory" | "inventoryState" => Ok(Self::Inventory),
            "hotbar" | "hotBarState" => Ok(Self::Hotbar),
            other => Err(GridError::UnknownSection(other.to_string())),
        }
    }
}

/// Row/column extent of a section grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionShape {
    /// Number of rows.
    pub rows: u8,
    /// Number of columns.
    pub columns: u8,
}

impl SectionShape {
    /// Create a shape.
    pub const fn new(rows: u8, columns: u8) -> Self {
        Self { rows, columns }
    }

    /// Total number of slots.
    pub const fn slot_count(self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Returns true when `coordinate` lies inside this shape.
    pub const fn contains(self, coordinate: Coordinate) -> bool {
        coordinate.row < self.rows && coordinate.column < self.columns
    }

    /// Reject coordinates outside `section`'s shape instead of clamping them.
    pub fn validate(self, section: SectionName, coordinate: Coordinate) -> Result<Coordinate, GridError> {
        if self.contains(coordinate) {
            Ok(coordinate)
        } else {
            Err(GridError::InvalidCoordinate {
                section,
                coordinate,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_id_is_stable() {
        assert_eq!(SectionName::Storage.as_u8(), 0);
        assert_eq!(SectionName::Inventory.as_u8(), 1);
        assert_eq!(SectionName::Hotbar.as_u8(), 2);
        for name in SectionName::ALL {
            assert_eq!(SectionName::from_u8(name.as_u8()), Some(name));
        }
        assert_eq!(SectionName::from_u8(3), None);
    }

    #[test]
    fn section_shapes_match_chest_screen() {
        assert_eq!(SectionName::Storage.shape().slot_count(), 27);
        assert_eq!(SectionName::Inventory.shape().slot_count(), 27);
        assert_eq!(SectionName::Hotbar.shape().slot_count(), 9);
    }

    #[test]
    fn parses_canonical_and_legacy_names() {
        assert_eq!("storage".parse(), Ok(SectionName::Storage));
        assert_eq!("chestState".parse(), Ok(SectionName::Storage));
        assert_eq!("inventoryState".parse(), Ok(SectionName::Inventory));
        assert_eq!("hotBarState".parse(), Ok(SectionName::Hotbar));
        assert_eq!(
            "offhand".parse::<SectionName>(),
            Err(GridError::UnknownSection("offhand".into()))
        );
    }

    #[test]
    fn validate_fails_fast_outside_shape() {
        let hotbar = SectionName::Hotbar.shape();
        assert!(hotbar.validate(SectionName::Hotbar, Coordinate::new(0, 8)).is_ok());
        assert!(matches!(
            hotbar.validate(SectionName::Hotbar, Coordinate::new(1, 0)),
            Err(GridError::InvalidCoordinate { rows: 1, columns: 9, .. })
        ));
        assert!(SectionName::Storage
            .shape()
            .validate(SectionName::Storage, Coordinate::new(0, 9))
            .is_err());
    }

    #[test]
    fn text_and_serde_agree_on_padding() {
        assert_eq!(
            " hotbar".parse::<SectionName>(),
            Err(GridError::UnknownSection(" hotbar".into()))
        );
        assert!(serde_json::from_str::<SectionName>("\" hotbar\"").is_err());
        assert!("Hotbar".parse::<SectionName>().is_err());
        assert!(serde_json::from_str::<SectionName>("\"Hotbar\"").is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&SectionName::Hotbar).unwrap();
        assert_eq!(json, "\"hotbar\"");
        let legacy: SectionName = serde_json::from_str("\"hotBarState\"").unwrap();
        assert_eq!(legacy, SectionName::Hotbar);
    }
}
