//! Syllo History Store
//!
//! Client-side store for past reasoning interactions. The store owns an
//! ordered list of records (newest first) and the current search keyword,
//! and mirrors every mutation into a single JSON file slot
//! (`{"records": [...], "lastUpdated": <epoch millis>}`). An absent file
//! is equivalent to an empty history.
//!
//! Persistence is best-effort: read and write failures are logged and
//! swallowed, never raised, and the in-memory list stays authoritative
//! for the session. The store is the sole writer of its storage slot.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use syllo_domain::HistoryRecord;
use tracing::{debug, warn};

/// On-disk layout of the storage slot.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    records: Vec<HistoryRecord>,
    #[serde(rename = "lastUpdated", default)]
    last_updated: i64,
}

/// Explicit state container for the reasoning history.
///
/// Created empty, populated once via [`HistoryStore::load`] at startup,
/// then mutated through [`add`](HistoryStore::add),
/// [`delete`](HistoryStore::delete) and [`clear`](HistoryStore::clear).
/// Mutations persist the full list synchronously, replacing the slot
/// wholesale.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<HistoryRecord>,
    search_keyword: String,
}

impl HistoryStore {
    /// Create an empty store backed by the given storage path.
    ///
    /// Nothing is read until [`load`](HistoryStore::load) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
            search_keyword: String::new(),
        }
    }

    /// Storage path backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records, newest first.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the in-memory list with the persisted content.
    ///
    /// A missing file starts empty; a corrupt file is logged and also
    /// starts empty. Never raises.
    pub fn load(&mut self) {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history storage, starting empty");
                return;
            }
            Err(error) => {
                warn!(path = %self.path.display(), %error, "failed to read history storage");
                return;
            }
        };

        match serde_json::from_str::<Snapshot>(&contents) {
            Ok(snapshot) => self.records = snapshot.records,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "corrupt history storage, starting empty");
                self.records.clear();
            }
        }
    }

    /// Prepend a record and persist the full list.
    ///
    /// Ids are not deduplicated here; callers are responsible for
    /// uniqueness.
    pub fn add(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
        self.persist();
    }

    /// Remove every record with the given id and persist.
    ///
    /// Removing all matches keeps behavior defined under accidental id
    /// collision. A missing id is a no-op, not an error.
    pub fn delete(&mut self, id: &str) {
        self.records.retain(|record| record.id != id);
        self.persist();
    }

    /// Empty the list and erase the storage slot entirely.
    ///
    /// The file is removed rather than rewritten empty, so a later load
    /// sees the same absent-slot state as a fresh start.
    pub fn clear(&mut self) {
        self.records.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(error) => {
                warn!(path = %self.path.display(), %error, "failed to remove history storage");
            }
        }
    }

    /// Set the current search keyword. Pure state update, no persistence.
    pub fn set_search_keyword(&mut self, keyword: impl Into<String>) {
        self.search_keyword = keyword.into();
    }

    /// The current search keyword.
    pub fn search_keyword(&self) -> &str {
        &self.search_keyword
    }

    /// Case-insensitive substring search over question and result.
    ///
    /// A blank keyword returns the full list in order; a non-matching
    /// keyword returns an empty list.
    pub fn search(&self, keyword: &str) -> Vec<HistoryRecord> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return self.records.clone();
        }
        let needle = keyword.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record.question.to_lowercase().contains(&needle)
                    || record.result.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Search with the stored keyword.
    pub fn filtered(&self) -> Vec<HistoryRecord> {
        self.search(&self.search_keyword)
    }

    /// Write the full list plus a last-updated timestamp to the slot,
    /// replacing any previous content. Failures are logged and swallowed.
    pub fn persist(&self) {
        let snapshot = Snapshot {
            records: self.records.clone(),
            last_updated: Utc::now().timestamp_millis(),
        };
        let contents = match serde_json::to_string_pretty(&snapshot) {
            Ok(contents) => contents,
            Err(error) => {
                warn!(%error, "failed to serialize history snapshot");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(error) = fs::create_dir_all(parent) {
                warn!(path = %self.path.display(), %error, "failed to create history directory");
                return;
            }
        }
        if let Err(error) = fs::write(&self.path, contents) {
            warn!(path = %self.path.display(), %error, "failed to persist history");
        }
    }
}
