//! Persisted notification marker.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Serialize, Deserialize)]
struct State {
    last_notified_max_date: String,
}

/// Read the marker. A missing or unreadable file means no prior
/// notification, never an error.
pub fn load(path: &Path) -> Option<String> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<State>(&raw) {
        Ok(state) => Some(state.last_notified_max_date),
        Err(e) => {
            warn!("ignoring unparseable state file {}: {}", path.display(), e);
            None
        }
    }
}

/// Overwrite the marker with the newly notified maximum.
pub fn save(path: &Path, date: NaiveDate) -> Result<()> {
    let state = State {
        last_notified_max_date: date.to_string(),
    };
    let json = serde_json::to_string_pretty(&state)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(&dir.path().join("state.json")), None);
    }

    #[test]
    fn garbage_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json at all").unwrap();
        assert_eq!(load(&path), None);
    }

    #[test]
    fn wrong_shape_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"some_other_key": 1}"#).unwrap();
        assert_eq!(load(&path), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        save(&path, date(2025, 11, 16)).unwrap();
        assert_eq!(load(&path), Some("2025-11-16".to_string()));
    }

    #[test]
    fn save_overwrites_previous_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        save(&path, date(2025, 11, 16)).unwrap();
        save(&path, date(2025, 12, 5)).unwrap();
        assert_eq!(load(&path), Some("2025-12-05".to_string()));
    }
}
