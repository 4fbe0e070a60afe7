//! In-memory Entity Store used for dry runs and tests.

use crate::error::StorageError;
use crate::store::EntityStore;
use crate::types::{EntityKind, RowId};
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
pub struct MemoryEntityStore {
    tables: RwLock<HashMap<EntityKind, Vec<(RowId, Vec<u8>)>>>,
}

impl MemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityStore for MemoryEntityStore {
    fn insert_encoded(&self, kind: EntityKind, payload: &[u8]) -> Result<RowId, StorageError> {
        let mut tables = self.tables.write();
        let table = tables.entry(kind).or_default();
        let id = table.last().map(|(id, _)| id + 1).unwrap_or(1);
        table.push((id, payload.to_vec()));
        Ok(id)
    }

    fn scan_encoded(&self, kind: EntityKind) -> Result<Vec<(RowId, Vec<u8>)>, StorageError> {
        Ok(self.tables.read().get(&kind).cloned().unwrap_or_default())
    }

    fn count(&self, kind: EntityKind) -> Result<usize, StorageError> {
        Ok(self.tables.read().get(&kind).map(Vec::len).unwrap_or(0))
    }
}
