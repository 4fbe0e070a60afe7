//! Entity Store
//!
//! Persistence collaborator for generated rows. Implementations only move
//! encoded bytes per [`EntityKind`]; typed insert and query live in
//! [`EntityStoreExt`] so the trait stays object safe.

pub mod memory;
pub mod persistence;

pub use memory::MemoryEntityStore;
pub use persistence::SledEntityStore;

use crate::entity::Entity;
use crate::error::StorageError;
use crate::types::{EntityKind, RowId};

/// A row together with the identity the store assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Persisted<T> {
    pub id: RowId,
    pub row: T,
}

/// Entity Store interface
///
/// Row ids are assigned per kind, starting at 1 and increasing with each insert;
/// `scan` returns rows in insertion order.
pub trait EntityStore: Send + Sync {
    fn insert_encoded(&self, kind: EntityKind, payload: &[u8]) -> Result<RowId, StorageError>;
    fn scan_encoded(&self, kind: EntityKind) -> Result<Vec<(RowId, Vec<u8>)>, StorageError>;
    fn count(&self, kind: EntityKind) -> Result<usize, StorageError>;

    /// Flush pending writes. In-memory stores have nothing to do.
    fn flush(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Typed access on top of any [`EntityStore`].
pub trait EntityStoreExt: EntityStore {
    fn insert<T: Entity>(&self, row: &T) -> Result<RowId, StorageError> {
        let payload = encode(row)?;
        self.insert_encoded(T::KIND, &payload)
    }

    fn insert_all<T: Entity>(&self, rows: &[T]) -> Result<Vec<RowId>, StorageError> {
        rows.iter().map(|row| self.insert(row)).collect()
    }

    /// All rows of `T` satisfying `predicate`, in insertion order.
    fn query<T, F>(&self, predicate: F) -> Result<Vec<Persisted<T>>, StorageError>
    where
        T: Entity,
        F: Fn(&T) -> bool,
    {
        let mut rows = Vec::new();
        for (id, payload) in self.scan_encoded(T::KIND)? {
            let row: T = decode(&payload)?;
            if predicate(&row) {
                rows.push(Persisted { id, row });
            }
        }
        Ok(rows)
    }

    fn all<T: Entity>(&self) -> Result<Vec<Persisted<T>>, StorageError> {
        self.query(|_: &T| true)
    }
}

impl<S: EntityStore + ?Sized> EntityStoreExt for S {}

/// Encode a row the way every store persists it.
pub fn encode<T: Entity>(row: &T) -> Result<Vec<u8>, StorageError> {
    bincode::serialize(row).map_err(|e| StorageError::Encode {
        kind: T::KIND,
        message: e.to_string(),
    })
}

pub fn decode<T: Entity>(payload: &[u8]) -> Result<T, StorageError> {
    bincode::deserialize(payload).map_err(|e| StorageError::Decode {
        kind: T::KIND,
        message: e.to_string(),
    })
}

/// Row counts per kind, skipping empty kinds.
pub fn kind_counts(store: &dyn EntityStore) -> Result<Vec<(EntityKind, usize)>, StorageError> {
    let mut counts = Vec::new();
    for kind in EntityKind::ALL {
        let count = store.count(*kind)?;
        if count > 0 {
            counts.push((*kind, count));
        }
    }
    Ok(counts)
}
