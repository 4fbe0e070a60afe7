//! Persistence layer for the Entity Store

use crate::error::StorageError;
use crate::store::EntityStore;
use crate::types::{EntityKind, RowId};
use std::path::Path;

/// Sled-based implementation of EntityStore
///
/// Each entity kind lives in its own tree keyed by the big-endian row id, so a
/// tree scan yields rows in insertion order.
pub struct SledEntityStore {
    db: sled::Db,
}

impl SledEntityStore {
    /// Create a new SledEntityStore at the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path).map_err(|e| {
            StorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to open sled database: {}", e),
            ))
        })?;
        Ok(Self { db })
    }

    pub fn from_db(db: sled::Db) -> Self {
        Self { db }
    }

    /// Get the underlying sled database (for advanced operations)
    pub fn db(&self) -> &sled::Db {
        &self.db
    }

    fn tree(&self, kind: EntityKind) -> Result<sled::Tree, StorageError> {
        self.db.open_tree(kind.as_str()).map_err(|e| {
            StorageError::Database(format!("Failed to open tree {}: {}", kind, e))
        })
    }
}

fn row_id_from_key(kind: EntityKind, key: &[u8]) -> Result<RowId, StorageError> {
    let bytes: [u8; 8] = key.try_into().map_err(|_| StorageError::Decode {
        kind,
        message: format!("row key has {} bytes, expected 8", key.len()),
    })?;
    Ok(RowId::from_be_bytes(bytes))
}

impl EntityStore for SledEntityStore {
    fn insert_encoded(&self, kind: EntityKind, payload: &[u8]) -> Result<RowId, StorageError> {
        let tree = self.tree(kind)?;
        let next_id = match tree.last()? {
            Some((key, _)) => row_id_from_key(kind, &key)? + 1,
            None => 1,
        };
        tree.insert(next_id.to_be_bytes(), payload).map_err(|e| {
            StorageError::Database(format!("Failed to insert {} row: {}", kind, e))
        })?;
        Ok(next_id)
    }

    fn scan_encoded(&self, kind: EntityKind) -> Result<Vec<(RowId, Vec<u8>)>, StorageError> {
        let tree = self.tree(kind)?;
        let mut rows = Vec::new();
        for item in tree.iter() {
            let (key, value) = item.map_err(|e| {
                StorageError::Database(format!("Failed to iterate {} rows: {}", kind, e))
            })?;
            rows.push((row_id_from_key(kind, &key)?, value.to_vec()));
        }
        Ok(rows)
    }

    fn count(&self, kind: EntityKind) -> Result<usize, StorageError> {
        Ok(self.tree(kind)?.len())
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db.flush().map_err(|e| {
            StorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to flush database: {}", e),
            ))
        })?;
        Ok(())
    }
}
