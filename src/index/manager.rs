//! Per-volume store manager.
//!
//! Each volume is backed by its own embedded database under
//! `db_path/<volume>`. Handles are opened lazily on the first `put` or
//! `dump` naming the volume, cached, and kept open for the manager's
//! lifetime — there is no close or delete path.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use rocksdb::{IteratorMode, Options, DB};
use tracing::{debug, info};

use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use crate::index::key::ChunkKey;
use crate::index::record::IndexRecord;

/// Maps volume names to open database handles and routes index operations.
///
/// Callable concurrently from multiple threads through a shared reference;
/// the handle cache is guarded by one coarse mutex (volume cardinality is
/// low), which also serializes first-opens so the engine never sees two
/// open attempts for the same volume.
pub struct VolumeIndexManager {
    base_path: PathBuf,
    /// volume name → open handle. At most one handle per volume, ever.
    stores: Mutex<HashMap<String, Arc<DB>>>,
}

impl VolumeIndexManager {
    /// Create the manager, ensuring the base directory exists.
    pub fn new(config: &IndexConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.db_path)?;
        Ok(VolumeIndexManager {
            base_path: config.db_path.clone(),
            stores: Mutex::new(HashMap::new()),
        })
    }

    /// Return the cached handle for `volume`, opening (and creating on
    /// disk if absent) the database on first access.
    fn get_or_open_store(&self, volume: &str) -> Result<Arc<DB>> {
        let mut stores = self.stores.lock();
        if let Some(db) = stores.get(volume) {
            return Ok(db.clone());
        }

        let path = self.base_path.join(volume);
        let mut opts = Options::default();
        opts.create_if_missing(true);
        let db = DB::open(&opts, &path).map_err(|e| IndexError::StorageOpen {
            volume: volume.to_string(),
            reason: e.to_string(),
        })?;
        info!(volume, path = ?path, "Volume store opened");

        let db = Arc::new(db);
        stores.insert(volume.to_string(), db.clone());
        Ok(db)
    }

    /// Record a chunk in `volume`'s index, stamped with the current
    /// wall-clock time. Overwrites any existing record at the same key
    /// (last writer wins, no read-before-write).
    pub fn put(
        &self,
        volume: &str,
        chunk_id: &str,
        content_cid: &str,
        content_path: &str,
    ) -> Result<()> {
        let key = ChunkKey::new(content_cid, content_path, chunk_id).encode();
        let value = IndexRecord::now()
            .to_bytes()
            .map_err(|e| IndexError::StorageWrite {
                volume: volume.to_string(),
                reason: format!("cannot serialize record: {e}"),
            })?;

        let db = self.get_or_open_store(volume)?;
        db.put(key.as_bytes(), &value)
            .map_err(|e| IndexError::StorageWrite {
                volume: volume.to_string(),
                reason: e.to_string(),
            })?;
        debug!(volume, key, "Chunk indexed");
        Ok(())
    }

    /// Dump the full index of `volume` into one in-memory map of composite
    /// key → raw serialized record. Values are returned opaque, not decoded.
    ///
    /// The whole scan is materialized at once; for a large volume this is
    /// memory-hungry (a known limitation of the format, not something this
    /// layer papers over). A failure mid-scan discards everything read so
    /// far — no partial results.
    ///
    /// Map ordering follows the engine's byte-lexicographic key order;
    /// callers must not read semantic meaning into it.
    pub fn dump(&self, volume: &str) -> Result<BTreeMap<String, String>> {
        let db = self.get_or_open_store(volume)?;

        let mut data = BTreeMap::new();
        for entry in db.iterator(IteratorMode::Start) {
            let (key, value) = entry.map_err(|e| IndexError::StorageRead {
                volume: volume.to_string(),
                reason: e.to_string(),
            })?;
            let key = String::from_utf8(key.into_vec()).map_err(|e| IndexError::StorageRead {
                volume: volume.to_string(),
                reason: format!("non-UTF-8 key: {e}"),
            })?;
            let value =
                String::from_utf8(value.into_vec()).map_err(|e| IndexError::StorageRead {
                    volume: volume.to_string(),
                    reason: format!("non-UTF-8 value at key '{key}': {e}"),
                })?;
            data.insert(key, value);
        }
        debug!(volume, entries = data.len(), "Volume dumped");
        Ok(data)
    }

    /// Names of volumes that currently hold an open handle, sorted.
    /// Opens nothing; purely introspective.
    pub fn open_volumes(&self) -> Vec<String> {
        let mut volumes: Vec<String> = self.stores.lock().keys().cloned().collect();
        volumes.sort();
        volumes
    }
}
