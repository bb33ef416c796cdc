use crate::domain::Entry;
use crate::registry::StationRegistry;
use eyre::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Key under which the full entry list lives, newest first.
const ENTRIES_KEY: &str = "gasStationEntries";
/// Serialized view of the pending subset. Rewritten from the full list on
/// every mutation, so it cannot drift from the `synced` flags.
const UNSYNCED_KEY: &str = "unsyncedEntries";
/// The station registry. Slots must outlive the short-lived CLI process,
/// running timers included.
const STATIONS_KEY: &str = "stations";

/// Durable key/value storage: one JSON file per key under the store
/// directory. Writes go to a temp file first and are swapped in with a
/// rename, so a crash mid-write leaves the previous content intact. A
/// missing or unreadable key degrades to "no prior data".
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        debug!("opening local store at {:?}", root);
        fs_err::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }
        let raw = match fs_err::read_to_string(&path) {
            Ok(v) => v,
            Err(err) => {
                warn!("failed to read {key}: {err}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(v) => Some(v),
            Err(err) => {
                warn!("failed to parse {key}: {err}");
                None
            }
        }
    }

    fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.key_path(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        let raw = serde_json::to_string(value)?;
        fs_err::write(&tmp, raw).wrap_err_with(|| format!("Failed to write {key}"))?;
        fs_err::rename(&tmp, &path).wrap_err_with(|| format!("Failed to swap in {key}"))?;
        Ok(())
    }

    /// The full persisted list, newest first. Empty on first run.
    pub fn entries(&self) -> Vec<Entry> {
        self.read_key(ENTRIES_KEY).unwrap_or_default()
    }

    /// The pending subset, derived from the full list. The serialized
    /// `unsyncedEntries` key is only ever a mirror of this.
    pub fn unsynced(&self) -> Vec<Entry> {
        self.entries().into_iter().filter(|e| !e.synced).collect()
    }

    /// What the `unsyncedEntries` key currently holds on disk.
    pub fn unsynced_cache(&self) -> Vec<Entry> {
        self.read_key(UNSYNCED_KEY).unwrap_or_default()
    }

    /// Inserts at the head of the list and persists both entry keys.
    pub fn append(&self, entry: &Entry) -> Result<()> {
        debug!("appending entry {}", entry.id);
        let mut entries = self.entries();
        entries.insert(0, entry.clone());
        self.write_entries(&entries)
    }

    /// Flips `synced` for the confirmed ids and persists both entry keys.
    /// Ids that are already synced or unknown are left alone.
    pub fn mark_synced(&self, ids: &[Uuid]) -> Result<()> {
        debug!("marking {} entries synced", ids.len());
        let mut entries = self.entries();
        for entry in entries.iter_mut() {
            if !entry.synced && ids.contains(&entry.id) {
                entry.synced = true;
            }
        }
        self.write_entries(&entries)
    }

    fn write_entries(&self, entries: &[Entry]) -> Result<()> {
        self.write_key(ENTRIES_KEY, &entries)?;
        let unsynced: Vec<&Entry> = entries.iter().filter(|e| !e.synced).collect();
        self.write_key(UNSYNCED_KEY, &unsynced)
    }

    /// The persisted registry; a fresh store starts with the default
    /// driver/passenger pair.
    pub fn stations(&self) -> StationRegistry {
        self.read_key(STATIONS_KEY)
            .unwrap_or_else(StationRegistry::with_default_pair)
    }

    pub fn save_stations(&self, registry: &StationRegistry) -> Result<()> {
        self.write_key(STATIONS_KEY, registry)
    }
}
