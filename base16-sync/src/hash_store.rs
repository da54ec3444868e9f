//! Hash store: SHA-256 idempotency tracking for written artifacts.
//!
//! Persists a [`HashStoreFile`] JSON document at
//! `<output_dir>/.base16-hashes.json`, keyed by artifact path relative to the
//! output directory. Saves use a `.tmp` sibling + rename.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{io_err, SyncError};

/// File name of the store inside an output directory.
pub const STORE_FILE: &str = ".base16-hashes.json";

/// In-memory map: relative artifact path → SHA-256 hex digest.
pub type HashStore = BTreeMap<String, String>;

/// On-disk hash store payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashStoreFile {
    pub written_at: DateTime<Utc>,
    pub files: HashStore,
}

/// `<output_dir>/.base16-hashes.json`
pub fn store_path_at(output_dir: &Path) -> PathBuf {
    output_dir.join(STORE_FILE)
}

/// Hex SHA-256 of `content`.
pub fn digest(content: &str) -> String {
    let mut h = Sha256::new();
    h.update(content.as_bytes());
    hex::encode(h.finalize())
}

/// Load the store for `output_dir`. Returns an empty store if none exists.
pub fn load_at(output_dir: &Path) -> Result<HashStoreFile, SyncError> {
    let path = store_path_at(output_dir);
    if !path.exists() {
        return Ok(HashStoreFile {
            written_at: Utc::now(),
            files: HashStore::new(),
        });
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save the store for `output_dir` atomically.
pub fn save_at(output_dir: &Path, store: &HashStoreFile) -> Result<(), SyncError> {
    std::fs::create_dir_all(output_dir).map_err(|e| io_err(output_dir, e))?;

    let path = store_path_at(output_dir);
    let json = serde_json::to_string_pretty(store)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, &path).map_err(|e| io_err(&path, e))?;
    Ok(())
}
