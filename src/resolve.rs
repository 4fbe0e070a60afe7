//! Natural-key resolver
//!
//! Looks up rows persisted by earlier stages. Every call is a fresh query
//! against the store: nothing is cached, so a stage always sees what was
//! actually persisted, including changes made by earlier extension hooks.
//! Exactly one row must match; anything else is an authoring or ordering
//! defect and fails the stage.

use crate::entity::Entity;
use crate::error::InstallError;
use crate::store::{EntityStore, EntityStoreExt, Persisted};
use crate::types::{NaturalKey, RowId};
use tracing::debug;

#[derive(Clone, Copy)]
pub struct NaturalKeyResolver<'a> {
    store: &'a dyn EntityStore,
}

impl<'a> NaturalKeyResolver<'a> {
    pub fn new(store: &'a dyn EntityStore) -> Self {
        Self { store }
    }

    /// Resolve the single `T` row identified by `key`.
    pub fn resolve<T: Entity>(&self, key: NaturalKey) -> Result<Persisted<T>, InstallError> {
        let kind = T::KIND;
        let mut matches = self.store.query(|row: &T| row.matches(&key))?;
        debug!(kind = %kind, key = %key, matches = matches.len(), "Resolved natural key");

        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(InstallError::NotFound { kind, key }),
            count => Err(InstallError::Ambiguous { kind, key, count }),
        }
    }

    /// Resolve and keep only the row id.
    pub fn resolve_id<T: Entity>(&self, key: NaturalKey) -> Result<RowId, InstallError> {
        self.resolve::<T>(key).map(|persisted| persisted.id)
    }

    /// Resolve each key in order, failing on the first miss.
    pub fn resolve_ids<T: Entity, I>(&self, keys: I) -> Result<Vec<RowId>, InstallError>
    where
        I: IntoIterator<Item = NaturalKey>,
    {
        keys.into_iter().map(|key| self.resolve_id::<T>(key)).collect()
    }
}
