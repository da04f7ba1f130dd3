//! Golden-file snapshots.
//!
//! JSON values are written as pretty JSON with object keys sorted, followed by
//! a trailing newline; text snapshots are stored verbatim. Tests compare
//! against the file on disk unless `CHESTGRID_UPDATE_SNAPSHOTS=1` is set, in
//! which case the file is (re)written.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Environment variable that enables snapshot updates.
pub const UPDATE_SNAPSHOTS_ENV: &str = "CHESTGRID_UPDATE_SNAPSHOTS";

/// Assert that `value` serializes to the JSON stored at `path`.
pub fn assert_json_snapshot<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let actual = canonical_json(value)?;
    compare_or_update(path.as_ref(), &actual)
}

/// Assert that `text` matches the file stored at `path`.
pub fn assert_text_snapshot<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    compare_or_update(path.as_ref(), text)
}

/// Render `value` the way snapshots store it.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value).context("Failed to serialize snapshot value")?;
    let mut out =
        serde_json::to_string_pretty(&sort_keys(value)).context("Failed to format snapshot JSON")?;
    out.push('\n');
    Ok(out)
}

fn compare_or_update(path: &Path, actual: &str) -> Result<()> {
    if updates_enabled() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, actual)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
        debug!(path = %path.display(), "updated snapshot");
        return Ok(());
    }

    let expected = fs::read_to_string(path).with_context(|| {
        format!(
            "Snapshot missing at {} (run with {UPDATE_SNAPSHOTS_ENV}=1 to create it)",
            path.display()
        )
    })?;

    if let Some((line, want, got)) = first_difference(&expected, actual) {
        bail!(
            "Snapshot mismatch at {} line {line}:\n  expected: {want}\n    actual: {got}\n(run with {UPDATE_SNAPSHOTS_ENV}=1 to update)",
            path.display()
        );
    }
    Ok(())
}

fn updates_enabled() -> bool {
    matches!(
        std::env::var(UPDATE_SNAPSHOTS_ENV).as_deref(),
        Ok("1" | "true" | "TRUE" | "yes" | "YES")
    )
}

/// 1-based line number plus both lines where the texts first diverge.
fn first_difference<'a>(expected: &'a str, actual: &'a str) -> Option<(usize, &'a str, &'a str)> {
    if expected == actual {
        return None;
    }
    let mut want = expected.lines();
    let mut got = actual.lines();
    let mut line = 1;
    loop {
        match (want.next(), got.next()) {
            (Some(a), Some(b)) if a == b => line += 1,
            (None, None) => return Some((line, "<trailing whitespace>", "<trailing whitespace>")),
            (a, b) => return Some((line, a.unwrap_or("<eof>"), b.unwrap_or("<eof>"))),
        }
    }
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect(),
            )
        }
        Value::Array(values) => Value::Array(values.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_json_sorts_keys() {
        let value = serde_json::json!({ "row": 0, "item": "apple", "column": 1 });
        assert_eq!(
            canonical_json(&value).unwrap(),
            "{\n  \"column\": 1,\n  \"item\": \"apple\",\n  \"row\": 0\n}\n"
        );
    }

    #[test]
    fn reports_first_differing_line() {
        assert_eq!(first_difference("a\nb\n", "a\nb\n"), None);
        assert_eq!(first_difference("a\nb\n", "a\nc\n"), Some((2, "b", "c")));
        assert_eq!(first_difference("a\n", "a\nb\n"), Some((2, "<eof>", "b")));
    }
}
