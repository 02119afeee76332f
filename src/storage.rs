//! Local persistence for the item collection.
//!
//! The whole collection is one JSON document under a fixed storage key in a
//! local data directory. Every mutation re-saves the entire list -- O(n) in
//! the collection size per write, not O(1). Missing or corrupt data degrades
//! to an empty collection rather than failing the caller.

use crate::config;
use crate::error::Result;
use crate::models::Item;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// StoreDocument — on-disk envelope
// ---------------------------------------------------------------------------

/// Persisted document layout. Early stores were a bare item array; the
/// envelope adds a schema version so a future layout change can migrate
/// instead of discarding data.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreDocument {
    schema_version: u32,
    items: Vec<Item>,
}

// ---------------------------------------------------------------------------
// StorageManager
// ---------------------------------------------------------------------------

/// Reads and writes the item collection under the fixed storage key.
pub struct StorageManager {
    /// Directory the store document lives in.
    pub data_dir: PathBuf,
}

impl StorageManager {
    /// Create a storage manager rooted at `data_dir`.
    ///
    /// If `data_dir` is `None`, uses the platform-appropriate default data
    /// directory. Creates the directory if it does not exist.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = data_dir.unwrap_or_else(config::default_data_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { data_dir: dir })
    }

    /// Path of the store document.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", config::STORAGE_KEY))
    }

    /// Load the persisted item collection.
    ///
    /// A missing file, an unreadable file, or unparseable JSON all yield an
    /// empty collection -- a broken store must never take the application
    /// down with it. The failure is logged and the next save overwrites the
    /// bad document.
    pub fn load(&self) -> Vec<Item> {
        let path = self.store_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no store document yet, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read store document");
                return Vec::new();
            }
        };

        match parse_document(&contents) {
            Some(items) => {
                debug!(path = %path.display(), count = items.len(), "loaded store document");
                items
            }
            None => {
                warn!(path = %path.display(), "corrupt store document, starting empty");
                Vec::new()
            }
        }
    }

    /// Persist the full ordered item collection.
    ///
    /// Writes to a temp file first and renames on success, so an interrupted
    /// write never leaves a truncated document behind.
    pub fn save(&self, items: &[Item]) -> Result<()> {
        let path = self.store_path();
        let doc = StoreDocument {
            schema_version: config::SCHEMA_VERSION,
            items: items.to_vec(),
        };
        let json = serde_json::to_string(&doc)?;

        let tmp_path = path.with_extension("json.tmp");
        let result = (|| -> Result<()> {
            fs::write(&tmp_path, json)?;
            fs::rename(&tmp_path, &path)?;
            Ok(())
        })();

        if result.is_err() {
            // Clean up the partial temp file on any error
            let _ = fs::remove_file(&tmp_path);
        } else {
            debug!(path = %path.display(), count = items.len(), "saved store document");
        }

        result
    }
}

/// Parse a store document, accepting the versioned envelope first and
/// falling back to the legacy bare item array.
fn parse_document(contents: &str) -> Option<Vec<Item>> {
    if let Ok(doc) = serde_json::from_str::<StoreDocument>(contents) {
        return Some(doc.items);
    }
    serde_json::from_str::<Vec<Item>>(contents).ok()
}
