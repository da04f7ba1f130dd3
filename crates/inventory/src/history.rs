//! Owner of the "current" inventory state, with undo/redo.
//!
//! Every applied move replaces the current state wholesale; readers holding an
//! earlier state keep seeing exactly what they were handed.

use std::collections::VecDeque;

use chestgrid_core::GridError;
use tracing::trace;

use crate::{DragStart, DropTarget, InventoryState, MoveOutcome, MoveRequest, Transfer};

/// Default number of undo steps retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Current inventory state plus bounded undo/redo stacks.
#[derive(Debug, Clone)]
pub struct InventoryHistory {
    current: InventoryState,
    past: VecDeque<InventoryState>,
    future: Vec<InventoryState>,
    limit: usize,
}

impl InventoryHistory {
    /// Start tracking from `initial`, keeping at most `limit` undo steps.
    pub fn new(initial: InventoryState, limit: usize) -> Self {
        Self {
            current: initial,
            past: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            future: Vec::new(),
            limit,
        }
    }

    /// The latest state.
    pub fn current(&self) -> &InventoryState {
        &self.current
    }

    /// Apply a move to the latest state.
    pub fn apply(&mut self, request: &MoveRequest) -> MoveOutcome {
        let transfer = self.current.move_item(request);
        self.commit(transfer)
    }

    /// Apply a drag-and-drop gesture to the latest state.
    pub fn apply_drag(
        &mut self,
        drag: &DragStart,
        drop: Option<&DropTarget>,
    ) -> Result<MoveOutcome, GridError> {
        let transfer = self.current.apply_drag(drag, drop)?;
        Ok(self.commit(transfer))
    }

    /// Step back one move. Returns the restored state, or `None` when there
    /// is nothing to undo.
    pub fn undo(&mut self) -> Option<&InventoryState> {
        let previous = self.past.pop_back()?;
        let undone = std::mem::replace(&mut self.current, previous);
        self.future.push(undone);
        trace!(undo = self.past.len(), redo = self.future.len(), "undo");
        Some(&self.current)
    }

    /// Re-apply the most recently undone move.
    pub fn redo(&mut self) -> Option<&InventoryState> {
        let next = self.future.pop()?;
        let redone = std::mem::replace(&mut self.current, next);
        self.push_past(redone);
        trace!(undo = self.past.len(), redo = self.future.len(), "redo");
        Some(&self.current)
    }

    /// Number of moves that can be undone.
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of moves that can be redone.
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    fn commit(&mut self, transfer: Transfer) -> MoveOutcome {
        if transfer.outcome.changed_state() {
            let previous = std::mem::replace(&mut self.current, transfer.state);
            self.push_past(previous);
            self.future.clear();
        }
        transfer.outcome
    }

    fn push_past(&mut self, state: InventoryState) {
        if self.limit == 0 {
            return;
        }
        while self.past.len() >= self.limit {
            self.past.pop_front();
        }
        self.past.push_back(state);
    }
}
