use anyhow::{Context, Result};
use chestgrid_inventory::{DragStart, DropTarget, InventoryHistory, MoveOutcome};
use chestgrid_testkit::{JsonlSink, MoveEventRecord};
use serde::Deserialize;
use serde_json::Value;
use std::{fs, path::Path};
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct MoveScriptFile {
    steps: Vec<MoveStep>,
}

/// One scripted gesture.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveStep {
    /// Drag an item and release it over `drop`, or outside the grid when absent.
    Move {
        drag: DragStart,
        #[serde(default)]
        drop: Option<DropTarget>,
    },
    Undo,
    Redo,
}

/// Tally of what a script did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub moved: usize,
    pub ignored: usize,
    pub undone: usize,
    pub redone: usize,
}

/// Scripted drag/drop gestures, applied in file order.
#[derive(Debug)]
pub struct MoveScript {
    steps: Vec<MoveStep>,
}

impl MoveScript {
    /// Load a move script from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read move script {}", path.display()))?;
        Self::parse(&contents)
    }

    /// Load a move script from an in-memory JSON string.
    pub fn parse(contents: &str) -> Result<Self> {
        let file: MoveScriptFile = serde_json::from_str(contents)?;
        if file.steps.is_empty() {
            anyhow::bail!("move script contains no steps");
        }
        Ok(Self { steps: file.steps })
    }

    /// Apply every step to `history`, optionally logging each one as a JSON line.
    ///
    /// Contract violations (coordinates outside a section) abort the script;
    /// the history keeps every step applied before the failing one.
    pub fn run(
        &self,
        history: &mut InventoryHistory,
        mut log: Option<&mut JsonlSink>,
    ) -> Result<ScriptSummary> {
        let mut summary = ScriptSummary::default();

        for (step, entry) in self.steps.iter().enumerate() {
            let (kind, detail) = match entry {
                MoveStep::Move { drag, drop } => {
                    let outcome = history
                        .apply_drag(drag, drop.as_ref())
                        .with_context(|| format!("step {step} is not a valid gesture"))?;
                    match &outcome {
                        MoveOutcome::Moved { .. } => summary.moved += 1,
                        MoveOutcome::StaleSource { found } => {
                            summary.ignored += 1;
                            warn!(
                                step,
                                item = %drag.item,
                                found = ?found.as_ref().map(|id| id.as_str()),
                                "source slot does not hold the dragged item"
                            );
                        }
                        MoveOutcome::Unchanged | MoveOutcome::Cancelled => summary.ignored += 1,
                    }
                    ("move", serde_json::to_value(&outcome)?)
                }
                MoveStep::Undo => {
                    let detail = match history.undo() {
                        Some(_) => {
                            summary.undone += 1;
                            "undone"
                        }
                        None => "nothing to undo",
                    };
                    ("undo", Value::from(detail))
                }
                MoveStep::Redo => {
                    let detail = match history.redo() {
                        Some(_) => {
                            summary.redone += 1;
                            "redone"
                        }
                        None => "nothing to redo",
                    };
                    ("redo", Value::from(detail))
                }
            };

            info!(step, kind, %detail, "applied script step");
            if let Some(sink) = log.as_deref_mut() {
                sink.write(&MoveEventRecord {
                    step,
                    kind,
                    detail,
                })?;
            }
        }

        Ok(summary)
    }
}
