#![warn(missing_docs)]
//! Core vocabulary shared across the workspace: section names and shapes,
//! the coordinate codec, and item identifiers.

pub mod coord;
mod error;
pub mod item;
pub mod section;

pub use coord::{
    linear_index_to_coordinate, linear_index_to_slot_key, to_slot_key, Coordinate, SlotKey,
    GRID_WIDTH,
};
pub use error::GridError;
pub use item::ItemId;
pub use section::{SectionName, SectionShape};
