//! Step-by-step replay tests.
//!
//! A replay applies a fixed list of steps to some state and snapshots the
//! state before the first step and after every step. The resulting report is
//! compared against a golden JSON file (see [`crate::assert_json_snapshot`]).

use crate::snapshot::assert_json_snapshot;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Configuration for a replay test.
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Human-readable name (written into the report).
    pub name: String,
    /// Path to the golden JSON file.
    pub snapshot_path: PathBuf,
}

/// Snapshot captured after `step` steps have been applied.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayFrame<S> {
    /// Number of steps applied so far.
    pub step: usize,
    /// Snapshot payload.
    pub snapshot: S,
}

#[derive(Debug, Clone, Serialize)]
struct ReplayReport<S> {
    name: String,
    frames: Vec<ReplayFrame<S>>,
}

/// Run a replay and assert (or update) the golden report.
///
/// The report holds `steps.len() + 1` frames.
pub fn run_replay<State, Step, Snapshot, ApplyFn, SnapFn>(
    config: ReplayConfig,
    mut state: State,
    steps: &[Step],
    mut apply: ApplyFn,
    mut snapshot: SnapFn,
) -> Result<()>
where
    Snapshot: Serialize,
    ApplyFn: FnMut(&mut State, &Step) -> Result<()>,
    SnapFn: FnMut(&State) -> Snapshot,
{
    let mut frames = Vec::with_capacity(steps.len() + 1);
    frames.push(ReplayFrame {
        step: 0,
        snapshot: snapshot(&state),
    });

    for (index, step) in steps.iter().enumerate() {
        apply(&mut state, step)?;
        frames.push(ReplayFrame {
            step: index + 1,
            snapshot: snapshot(&state),
        });
    }

    let report = ReplayReport {
        name: config.name,
        frames,
    };
    assert_json_snapshot(config.snapshot_path, &report)
}
