//! Persisted run history.
//!
//! The backing store is a JSON file keyed by algorithm display name, each
//! value holding two index-aligned arrays: `times` (seconds) and `memory`
//! (peak KB), one element per past run. Loading never fails: an absent,
//! unreadable, or malformed file falls back to an empty store.

use crate::model::{AlgorithmId, HistoryEntry};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const HISTORY_FILE: &str = "sort_history.json";

pub struct HistoryStore {
    path: PathBuf,
    entries: BTreeMap<String, HistoryEntry>,
}

fn empty_entries() -> BTreeMap<String, HistoryEntry> {
    AlgorithmId::ALL
        .iter()
        .map(|a| (a.display_name().to_string(), HistoryEntry::default()))
        .collect()
}

impl HistoryStore {
    /// Default location under the platform data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("sortbench")
            .join(HISTORY_FILE)
    }

    /// Read persisted history from `path`. Any read or parse failure yields
    /// a fresh store with an empty entry per algorithm; a well-formed file
    /// missing some algorithm keys gets them filled in empty.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut entries = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str::<BTreeMap<String, HistoryEntry>>(&text)
                .unwrap_or_else(|_| empty_entries()),
            Err(_) => empty_entries(),
        };
        for algorithm in AlgorithmId::ALL {
            entries
                .entry(algorithm.display_name().to_string())
                .or_default();
        }
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry(&self, algorithm: AlgorithmId) -> &HistoryEntry {
        // Every known key is seeded at load time.
        &self.entries[algorithm.display_name()]
    }

    /// Record one run's duration and peak memory, then persist eagerly.
    /// Durability is favored over write throughput: runs are interactive
    /// and infrequent.
    pub fn append(&mut self, algorithm: AlgorithmId, duration: f64, memory: f64) -> Result<()> {
        let entry = self
            .entries
            .entry(algorithm.display_name().to_string())
            .or_default();
        entry.times.push(duration);
        entry.memory.push(memory);
        self.persist()
    }

    /// Serialize the full mapping and overwrite the backing file.
    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create history directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)
            .with_context(|| format!("write history file {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn absent_file_loads_empty_store_with_all_keys() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::load(dir.path().join("missing.json"));
        for algorithm in AlgorithmId::ALL {
            assert!(store.entry(algorithm).times.is_empty());
            assert!(store.entry(algorithm).memory.is_empty());
        }
    }

    #[test]
    fn malformed_file_falls_back_to_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(HISTORY_FILE);
        fs::write(&path, "{ not json").unwrap();
        let store = HistoryStore::load(&path);
        assert!(store.entry(AlgorithmId::Quick).times.is_empty());
    }

    #[test]
    fn missing_keys_are_normalized_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(HISTORY_FILE);
        fs::write(
            &path,
            r#"{"Quick Sort": {"times": [0.5], "memory": [12.0]}}"#,
        )
        .unwrap();
        let store = HistoryStore::load(&path);
        assert_eq!(store.entry(AlgorithmId::Quick).times, vec![0.5]);
        assert!(store.entry(AlgorithmId::Heap).times.is_empty());
    }

    #[test]
    fn append_then_reload_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(HISTORY_FILE);
        let mut store = HistoryStore::load(&path);
        store.append(AlgorithmId::Merge, 0.002, 34.5).unwrap();
        store.append(AlgorithmId::Merge, 0.004, 36.0).unwrap();
        store.append(AlgorithmId::Comb, 0.001, 8.25).unwrap();

        let reloaded = HistoryStore::load(&path);
        assert_eq!(reloaded.entry(AlgorithmId::Merge).times, vec![0.002, 0.004]);
        assert_eq!(reloaded.entry(AlgorithmId::Merge).memory, vec![34.5, 36.0]);
        assert_eq!(reloaded.entry(AlgorithmId::Comb).times, vec![0.001]);
        for algorithm in AlgorithmId::ALL {
            assert_eq!(reloaded.entry(algorithm), store.entry(algorithm));
        }
    }

    #[test]
    fn append_is_visible_before_reload() {
        let dir = tempdir().unwrap();
        let mut store = HistoryStore::load(dir.path().join(HISTORY_FILE));
        store.append(AlgorithmId::Bubble, 1.5, 2.5).unwrap();
        assert_eq!(store.entry(AlgorithmId::Bubble).times, vec![1.5]);
        assert_eq!(store.entry(AlgorithmId::Bubble).memory, vec![2.5]);
    }

    #[test]
    fn persisted_file_uses_display_name_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(HISTORY_FILE);
        let mut store = HistoryStore::load(&path);
        store.append(AlgorithmId::Selection, 0.1, 1.0).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(parsed.get("Selection Sort").is_some());
        assert_eq!(parsed["Selection Sort"]["times"][0], 0.1);
        assert_eq!(parsed["Selection Sort"]["memory"][0], 1.0);
    }
}
