//! Coordinate codec.
//!
//! Every section is laid out as a grid [`GRID_WIDTH`] cells wide and is
//! enumerated row-major, so a linear index `i` sits at row `i / 9`, column
//! `i % 9`. Slot keys are typed pairs rather than glued strings, which keeps
//! `(1, 23)` and `(12, 3)` apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::GridError;

/// Number of columns in every section grid.
pub const GRID_WIDTH: u8 = 9;

/// Zero-based `(row, column)` position inside a section.
///
/// Ordering is row-major, which matches slot enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row, counted from the top of the grid.
    pub row: u8,
    /// Column, counted from the left of the grid.
    pub column: u8,
}

impl Coordinate {
    /// Create a coordinate.
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Position of this coordinate in row-major enumeration order.
    pub const fn linear_index(self) -> usize {
        self.row as usize * GRID_WIDTH as usize + self.column as usize
    }

    /// Canonical slot key for this coordinate.
    pub const fn slot_key(self) -> SlotKey {
        SlotKey(self)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Key used to index a slot within a section.
///
/// Rendered as `row,column`. Two keys are equal exactly when their
/// coordinates are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SlotKey(Coordinate);

impl SlotKey {
    /// Coordinate this key was derived from.
    pub const fn coordinate(self) -> Coordinate {
        self.0
    }

    /// Row-major index of the keyed slot.
    pub const fn linear_index(self) -> usize {
        self.0.linear_index()
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0.row, self.0.column)
    }
}

impl FromStr for SlotKey {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidSlotKey(s.to_string());
        let (row, column) = s.split_once(',').ok_or_else(invalid)?;
        let row = parse_canonical_u8(row).ok_or_else(invalid)?;
        let column = parse_canonical_u8(column).ok_or_else(invalid)?;
        Ok(to_slot_key(row, column))
    }
}

/// Parse the exact decimal form `Display` writes: ASCII digits only, no sign,
/// no leading zeros.
fn parse_canonical_u8(text: &str) -> Option<u8> {
    let canonical = !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'));
    if canonical {
        text.parse().ok()
    } else {
        None
    }
}

impl From<SlotKey> for String {
    fn from(key: SlotKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for SlotKey {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Map a `(row, column)` pair to its slot key.
pub const fn to_slot_key(row: u8, column: u8) -> SlotKey {
    SlotKey(Coordinate::new(row, column))
}

/// Map a row-major linear index to its coordinate.
///
/// Indices beyond `u8` rows are a caller contract violation; sections never
/// enumerate that far.
pub const fn linear_index_to_coordinate(index: usize) -> Coordinate {
    let width = GRID_WIDTH as usize;
    Coordinate::new((index / width) as u8, (index % width) as u8)
}

/// Map a row-major linear index straight to its slot key.
pub const fn linear_index_to_slot_key(index: usize) -> SlotKey {
    linear_index_to_coordinate(index).slot_key()
}
