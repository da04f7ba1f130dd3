//! Moving items between slots.
//!
//! A move clears the source slot and writes the item into the destination,
//! possibly in another section. The destination's previous occupant is
//! discarded (one item per slot, no stacking, no swapping). Before touching
//! anything the source slot is re-read: a drag that no longer matches the
//! state it is applied to becomes a no-op.

use std::fmt;

use chestgrid_core::{Coordinate, GridError, ItemId, SectionName, SlotKey};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::InventoryState;

/// Validated address of a slot: a section plus a key inside its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SlotRef {
    section: SectionName,
    key: SlotKey,
}

impl SlotRef {
    /// Resolve a coordinate inside `section`, failing fast when it lies
    /// outside the section's shape.
    pub fn new(section: SectionName, coordinate: Coordinate) -> Result<Self, GridError> {
        let coordinate = section.shape().validate(section, coordinate)?;
        Ok(Self {
            section,
            key: coordinate.slot_key(),
        })
    }

    /// Shorthand for [`SlotRef::new`] from a raw pair.
    pub fn at(section: SectionName, row: u8, column: u8) -> Result<Self, GridError> {
        Self::new(section, Coordinate::new(row, column))
    }

    /// Resolve an existing key inside `section`.
    pub fn from_key(section: SectionName, key: SlotKey) -> Result<Self, GridError> {
        Self::new(section, key.coordinate())
    }

    pub(crate) fn from_valid_key(section: SectionName, key: SlotKey) -> Self {
        Self { section, key }
    }

    /// Section of the slot.
    pub fn section(&self) -> SectionName {
        self.section
    }

    /// Key of the slot within its section.
    pub fn key(&self) -> SlotKey {
        self.key
    }

    /// Coordinate of the slot within its section.
    pub fn coordinate(&self) -> Coordinate {
        self.key.coordinate()
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.section, self.key)
    }
}

/// Relocate `item` from one slot to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    /// Item the caller believes sits in `from`.
    pub item: ItemId,
    /// Source slot.
    pub from: SlotRef,
    /// Destination slot.
    pub to: SlotRef,
}

impl MoveRequest {
    /// Create a request.
    pub fn new(item: ItemId, from: SlotRef, to: SlotRef) -> Self {
        Self { item, from, to }
    }
}

/// What a move did to the state it was applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The item moved. `displaced` is the destination's prior occupant,
    /// which is now gone from the aggregate.
    Moved {
        /// Item overwritten at the destination.
        displaced: Option<ItemId>,
    },
    /// Source and destination were the same slot.
    Unchanged,
    /// The source slot did not hold the dragged item.
    StaleSource {
        /// What the source slot actually held.
        found: Option<ItemId>,
    },
    /// The item was dropped outside every slot.
    Cancelled,
}

impl MoveOutcome {
    /// True when the resulting state differs from the input state.
    pub fn changed_state(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Result of applying a move: the derived state and what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// New state. Shares every section with the input when nothing changed.
    pub state: InventoryState,
    /// What happened.
    pub outcome: MoveOutcome,
}

impl Transfer {
    fn unchanged(state: &InventoryState, outcome: MoveOutcome) -> Self {
        Self {
            state: state.clone(),
            outcome,
        }
    }
}

/// Drag gesture start, captured from the slot under the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragStart {
    /// Item being dragged.
    pub item: ItemId,
    /// Section the drag started in.
    pub section: SectionName,
    /// Slot the drag started on.
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

/// Slot the dragged item was released over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTarget {
    /// Section under the cursor.
    pub section: SectionName,
    /// Slot under the cursor.
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl InventoryState {
    /// Apply a move and return the derived state.
    ///
    /// `self` is left untouched. Sections the move does not write to are
    /// shared with the result.
    pub fn move_item(&self, request: &MoveRequest) -> Transfer {
        let found = self.occupant(request.from);
        if found != Some(&request.item) {
            debug!(
                item = %request.item,
                from = %request.from,
                found = ?found.map(ItemId::as_str),
                "ignoring move from stale source slot"
            );
            let found = found.cloned();
            return Transfer::unchanged(self, MoveOutcome::StaleSource { found });
        }

        if request.from == request.to {
            return Transfer::unchanged(self, MoveOutcome::Unchanged);
        }

        let mut next = self.clone();
        next.section_mut(request.from.section())
            .take(request.from.key());
        let displaced = next
            .section_mut(request.to.section())
            .replace(request.to.key(), Some(request.item.clone()));

        if let Some(lost) = &displaced {
            warn!(
                item = %request.item,
                displaced = %lost,
                slot = %request.to,
                "destination occupant overwritten"
            );
        }
        debug!(
            item = %request.item,
            from = %request.from,
            to = %request.to,
            "moved item"
        );

        Transfer {
            state: next,
            outcome: MoveOutcome::Moved { displaced },
        }
    }

    /// Resolve a drag-and-drop gesture into a move and apply it.
    ///
    /// `drop` is `None` when the item was released outside every slot, which
    /// leaves the state as it was. Coordinates outside a section's shape are
    /// rejected before any state is derived.
    pub fn apply_drag(
        &self,
        drag: &DragStart,
        drop: Option<&DropTarget>,
    ) -> Result<Transfer, GridError> {
        let from = SlotRef::new(drag.section, drag.coordinate)?;
        let Some(drop) = drop else {
            debug!(item = %drag.item, from = %from, "drag released outside the grid");
            return Ok(Transfer::unchanged(self, MoveOutcome::Cancelled));
        };
        let to = SlotRef::new(drop.section, drop.coordinate)?;
        Ok(self.move_item(&MoveRequest::new(drag.item.clone(), from, to)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InventorySeed;

    fn item(id: &str) -> ItemId {
        ItemId::parse(id).unwrap()
    }

    fn slot(section: SectionName, row: u8, column: u8) -> SlotRef {
        SlotRef::at(section, row, column).unwrap()
    }

    fn seeded(entries: &[(SectionName, u8, u8, &str)]) -> InventoryState {
        let seed = entries
            .iter()
            .fold(InventorySeed::default(), |seed, &(section, row, column, id)| {
                seed.with(section, row, column, item(id))
            });
        InventoryState::from_seed(&seed).unwrap()
    }

    #[test]
    fn moves_within_one_section() {
        let state = seeded(&[(SectionName::Storage, 0, 0, "diamond")]);
        let transfer = state.move_item(&MoveRequest::new(
            item("diamond"),
            slot(SectionName::Storage, 0, 0),
            slot(SectionName::Storage, 2, 5),
        ));

        assert_eq!(transfer.outcome, MoveOutcome::Moved { displaced: None });
        assert_eq!(transfer.state.occupant(slot(SectionName::Storage, 0, 0)), None);
        assert_eq!(
            transfer.state.occupant(slot(SectionName::Storage, 2, 5)),
            Some(&item("diamond"))
        );
        assert!(transfer
            .state
            .shares_section_with(&state, SectionName::Inventory));
        assert!(transfer.state.shares_section_with(&state, SectionName::Hotbar));
        assert!(!transfer.state.shares_section_with(&state, SectionName::Storage));
    }

    #[test]
    fn cross_section_move_touches_only_two_sections() {
        let state = seeded(&[(SectionName::Storage, 0, 0, "diamond")]);
        let transfer = state.move_item(&MoveRequest::new(
            item("diamond"),
            slot(SectionName::Storage, 0, 0),
            slot(SectionName::Hotbar, 0, 3),
        ));

        assert_eq!(transfer.state.occupant(slot(SectionName::Storage, 0, 0)), None);
        assert_eq!(
            transfer.state.occupant(slot(SectionName::Hotbar, 0, 3)),
            Some(&item("diamond"))
        );
        assert!(transfer
            .state
            .shares_section_with(&state, SectionName::Inventory));
    }

    #[test]
    fn overwrite_discards_previous_occupant() {
        let state = seeded(&[
            (SectionName::Hotbar, 0, 0, "sword"),
            (SectionName::Inventory, 1, 2, "apple"),
        ]);
        let transfer = state.move_item(&MoveRequest::new(
            item("sword"),
            slot(SectionName::Hotbar, 0, 0),
            slot(SectionName::Inventory, 1, 2),
        ));

        assert_eq!(
            transfer.outcome,
            MoveOutcome::Moved {
                displaced: Some(item("apple"))
            }
        );
        assert_eq!(transfer.state.locate(&item("apple")), None);
        assert_eq!(transfer.state.item_count(), 1);
    }

    #[test]
    fn self_move_is_a_no_op() {
        let state = seeded(&[(SectionName::Inventory, 2, 2, "bread")]);
        let here = slot(SectionName::Inventory, 2, 2);
        let transfer = state.move_item(&MoveRequest::new(item("bread"), here, here));

        assert_eq!(transfer.outcome, MoveOutcome::Unchanged);
        assert_eq!(transfer.state, state);
        assert!(transfer.state.shares_storage_with(&state));
    }

    #[test]
    fn stale_source_is_ignored() {
        let state = seeded(&[(SectionName::Storage, 0, 0, "diamond")]);
        let transfer = state.move_item(&MoveRequest::new(
            item("emerald"),
            slot(SectionName::Storage, 0, 0),
            slot(SectionName::Hotbar, 0, 0),
        ));

        assert_eq!(
            transfer.outcome,
            MoveOutcome::StaleSource {
                found: Some(item("diamond"))
            }
        );
        assert_eq!(transfer.state, state);
        assert_eq!(transfer.state.locate(&item("emerald")), None);
    }

    #[test]
    fn drag_outside_grid_is_cancelled() {
        let state = seeded(&[(SectionName::Hotbar, 0, 1, "torch")]);
        let drag = DragStart {
            item: item("torch"),
            section: SectionName::Hotbar,
            coordinate: Coordinate::new(0, 1),
        };
        let transfer = state.apply_drag(&drag, None).unwrap();
        assert_eq!(transfer.outcome, MoveOutcome::Cancelled);
        assert_eq!(transfer.state.occupant(slot(SectionName::Hotbar, 0, 1)), Some(&item("torch")));
    }

    #[test]
    fn drag_with_invalid_coordinates_fails_fast() {
        let state = seeded(&[(SectionName::Hotbar, 0, 1, "torch")]);
        let drag = DragStart {
            item: item("torch"),
            section: SectionName::Hotbar,
            coordinate: Coordinate::new(0, 1),
        };
        let drop = DropTarget {
            section: SectionName::Hotbar,
            coordinate: Coordinate::new(2, 0),
        };
        assert!(matches!(
            state.apply_drag(&drag, Some(&drop)),
            Err(GridError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn drag_events_deserialize_flat() {
        let drag: DragStart = serde_json::from_str(
            r#"{ "item": "diamond", "section": "storage", "row": 0, "column": 0 }"#,
        )
        .unwrap();
        assert_eq!(drag.coordinate, Coordinate::new(0, 0));
        let drop: DropTarget =
            serde_json::from_str(r#"{ "section": "hotbar", "row": 0, "column": 3 }"#).unwrap();
        let transfer = seeded(&[(SectionName::Storage, 0, 0, "diamond")])
            .apply_drag(&drag, Some(&drop))
            .unwrap();
        assert!(transfer.outcome.changed_state());
    }

    #[test]
    fn slot_ref_display() {
        assert_eq!(slot(SectionName::Hotbar, 0, 3).to_string(), "hotbar[0,3]");
    }
}
