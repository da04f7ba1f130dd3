#![warn(missing_docs)]
//! Test surfaces for the chest grid: golden snapshots, step replays, and a
//! newline-delimited JSON log of applied moves.

mod replay;
mod snapshot;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub use replay::*;
pub use snapshot::*;

/// One line of a move log.
#[derive(Debug, Serialize)]
pub struct MoveEventRecord<'a> {
    /// Zero-based position of the step in its script.
    pub step: usize,
    /// Step kind (`move`, `undo`, `redo`).
    pub kind: &'a str,
    /// Structured description of what happened, e.g. a serialized move outcome.
    pub detail: Value,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent directories if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create move log {}", path.display()))?;
        Ok(Self { file })
    }

    /// Append one serializable record as a line.
    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn jsonl_sink_writes_one_line_per_record() {
        let path = std::env::temp_dir().join(format!(
            "chestgrid-moves-{}.jsonl",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let mut sink = JsonlSink::create(&path).expect("sink create");
        for (step, kind) in ["move", "undo"].into_iter().enumerate() {
            sink.write(&MoveEventRecord {
                step,
                kind,
                detail: serde_json::json!({ "outcome": "moved" }),
            })
            .expect("write succeeds");
        }
        drop(sink);

        let contents = fs::read_to_string(&path).expect("file readable");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"kind\":\"move\""));
        assert!(lines[1].contains("\"step\":1"));
        let first: Value = serde_json::from_str(lines[0]).expect("line is JSON");
        assert_eq!(first["detail"]["outcome"], "moved");
        let _ = fs::remove_file(&path);
    }
}
