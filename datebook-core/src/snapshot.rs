//! Snapshot persistence for the event store.
//!
//! The whole store serializes to a single JSON document. Loading is
//! deliberately infallible: a missing or malformed snapshot reads as the
//! empty store, so a damaged file can never lock the calendar out.

use std::path::{Path, PathBuf};

use crate::error::{DatebookError, DatebookResult};
use crate::store::EventStore;

/// File name of the snapshot inside the data directory.
pub const SNAPSHOT_FILE: &str = "events.json";

/// A file-backed slot holding the serialized [`EventStore`].
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    /// The snapshot stored at `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Snapshot { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored events.
    ///
    /// A missing, unreadable, or malformed snapshot (broken JSON, a foreign
    /// shape, or an event that no longer passes validation) reads as the
    /// empty store. The next [`save`](Self::save) starts a fresh history.
    pub fn load(&self) -> EventStore {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return EventStore::new();
        };
        serde_json::from_str(&contents).unwrap_or_default()
    }

    /// Serialize the whole store and replace the snapshot atomically:
    /// write to a sibling temp file, then rename over the target. Creates
    /// the parent directory on first save.
    pub fn save(&self, store: &EventStore) -> DatebookResult<()> {
        let contents = serde_json::to_string_pretty(store)
            .map_err(|e| DatebookError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, contents)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_key::DateKey;
    use crate::event::EventDraft;
    use chrono::NaiveDate;

    fn key(year: i32, month: u32, day: u32) -> DateKey {
        DateKey::from_date(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    fn populated_store() -> EventStore {
        let mut store = EventStore::new();
        store
            .add_event(
                key(2025, 1, 3),
                EventDraft::new("Standup", "09:00", "10:00", "Daily sync with the team"),
            )
            .unwrap();
        store
            .add_event(
                key(2025, 1, 3),
                EventDraft::new("Review", "10:00", "11:00", "Sprint review"),
            )
            .unwrap();
        store
            .add_event(
                key(2025, 2, 14),
                EventDraft::new("Dinner", "19:00", "21:00", "Table for two"),
            )
            .unwrap();
        store
    }

    fn snapshot_in(dir: &tempfile::TempDir) -> Snapshot {
        Snapshot::at(dir.path().join(SNAPSHOT_FILE))
    }

    #[test]
    fn save_then_load_round_trips_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot_in(&dir);
        let store = populated_store();

        snapshot.save(&store).unwrap();
        assert_eq!(snapshot.load(), store);
    }

    #[test]
    fn written_file_uses_the_wire_layout() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot_in(&dir);
        snapshot.save(&populated_store()).unwrap();

        let raw = std::fs::read_to_string(snapshot.path()).unwrap();
        assert!(raw.contains("\"03-01-2025\""), "got {raw}");
        assert!(raw.contains("\"startTime\": \"09:00\""), "got {raw}");
        assert!(!raw.contains("days"), "wrapper leaked into the file: {raw}");
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(snapshot_in(&dir).load().is_empty());
    }

    #[test]
    fn broken_json_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot_in(&dir);
        std::fs::write(snapshot.path(), "{ not json").unwrap();
        assert!(snapshot.load().is_empty());
    }

    #[test]
    fn foreign_shape_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot_in(&dir);
        std::fs::write(snapshot.path(), "[1, 2, 3]").unwrap();
        assert!(snapshot.load().is_empty());
    }

    #[test]
    fn foreign_key_shape_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot_in(&dir);
        // ISO-keyed snapshot from some other tool.
        let raw = r#"{"2025-01-03": []}"#;
        std::fs::write(snapshot.path(), raw).unwrap();
        assert!(snapshot.load().is_empty());
    }

    #[test]
    fn snapshot_with_an_invalid_event_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot_in(&dir);
        let raw = r#"
            {
              "03-01-2025": [
                {
                  "name": "Standup",
                  "startTime": "10:00",
                  "endTime": "09:00",
                  "description": "Times got swapped by hand-editing"
                }
              ]
            }
        "#;
        std::fs::write(snapshot.path(), raw).unwrap();
        assert!(snapshot.load().is_empty());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::at(dir.path().join("nested").join("deeper").join(SNAPSHOT_FILE));

        snapshot.save(&populated_store()).unwrap();
        assert!(snapshot.path().exists());
    }

    #[test]
    fn save_replaces_the_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot_in(&dir);

        snapshot.save(&populated_store()).unwrap();
        let mut store = snapshot.load();
        store
            .remove_event(&key(2025, 2, 14), chrono::NaiveTime::from_hms_opt(19, 0, 0).unwrap())
            .unwrap();
        snapshot.save(&store).unwrap();

        let reloaded = snapshot.load();
        assert_eq!(reloaded.dates().count(), 1);
        assert!(reloaded.events_on(&key(2025, 2, 14)).is_empty());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot_in(&dir);
        snapshot.save(&populated_store()).unwrap();

        let entries: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec![SNAPSHOT_FILE.to_string()]);
    }
}
