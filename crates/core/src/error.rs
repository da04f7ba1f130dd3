//! Contract violations raised at the grid boundary.

use thiserror::Error;

use crate::{Coordinate, SectionName, SlotKey};

/// Errors emitted when a caller hands the grid something it cannot address.
///
/// None of these are recoverable at runtime: they are rejected before any
/// new inventory snapshot is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A `(row, column)` pair outside the fixed shape of its section.
    #[error("coordinate {coordinate} is outside the {section} grid ({rows}x{columns})")]
    InvalidCoordinate {
        /// Section the coordinate was resolved against.
        section: SectionName,
        /// Offending coordinate.
        coordinate: Coordinate,
        /// Row count of the section.
        rows: u8,
        /// Column count of the section.
        columns: u8,
    },
    /// A section identifier outside the closed storage/inventory/hotbar set.
    #[error("unknown section name '{0}'")]
    UnknownSection(String),
    /// A slot key string that does not have the `row,column` form.
    #[error("invalid slot key '{0}' (expected 'row,column')")]
    InvalidSlotKey(String),
    /// An item identifier that fails validation.
    #[error("invalid item id '{id}': {reason}")]
    InvalidItemId {
        /// Raw input.
        id: String,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// The same item was placed in more than one slot.
    #[error("item '{0}' occupies more than one slot")]
    DuplicateItem(String),
    /// A seed placed two items into the same slot.
    #[error("slot {key} in {section} is seeded more than once")]
    SlotAlreadySeeded {
        /// Section holding the slot.
        section: SectionName,
        /// Key of the contested slot.
        key: SlotKey,
    },
}
