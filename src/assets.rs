//! Binary asset ingestion: pictures and downloadable files.
//!
//! Generators hand raw bytes to an [`AssetStore`] and keep only the returned
//! [`AssetId`]. Identifiers are content addressed (blake3 over the kind, the
//! file name and the bytes), so ingesting the same asset twice is harmless.

use crate::error::StorageError;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Hex-encoded blake3 identifier of a stored asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetId(pub String);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    Picture,
    Download,
}

/// Metadata and payload of a stored asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAsset {
    pub kind: AssetKind,
    pub content_type: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Asset ingestion collaborator
pub trait AssetStore: Send + Sync {
    fn put(&self, id: &AssetId, asset: &StoredAsset) -> Result<(), StorageError>;
    fn get(&self, id: &AssetId) -> Result<Option<StoredAsset>, StorageError>;
    fn count(&self) -> Result<usize, StorageError>;

    /// Store an image and return its identifier.
    fn insert_picture(
        &self,
        bytes: &[u8],
        content_type: &str,
        seo_name: &str,
    ) -> Result<AssetId, StorageError> {
        store_asset(self, AssetKind::Picture, bytes, content_type, seo_name)
    }

    /// Store a downloadable file and return its identifier.
    fn insert_download(
        &self,
        bytes: &[u8],
        content_type: &str,
        file_name: &str,
    ) -> Result<AssetId, StorageError> {
        store_asset(self, AssetKind::Download, bytes, content_type, file_name)
    }
}

fn store_asset<S: AssetStore + ?Sized>(
    store: &S,
    kind: AssetKind,
    bytes: &[u8],
    content_type: &str,
    file_name: &str,
) -> Result<AssetId, StorageError> {
    let id = compute_asset_id(kind, file_name, bytes);
    store.put(
        &id,
        &StoredAsset {
            kind,
            content_type: content_type.to_string(),
            file_name: file_name.to_string(),
            bytes: bytes.to_vec(),
        },
    )?;
    Ok(id)
}

/// Deterministic asset identifier.
pub fn compute_asset_id(kind: AssetKind, file_name: &str, bytes: &[u8]) -> AssetId {
    let mut hasher = blake3::Hasher::new();
    let tag: &[u8] = match kind {
        AssetKind::Picture => b"picture",
        AssetKind::Download => b"download",
    };
    hasher.update(tag);
    hasher.update(&(file_name.len() as u64).to_le_bytes());
    hasher.update(file_name.as_bytes());
    hasher.update(bytes);
    AssetId(hex::encode(hasher.finalize().as_bytes()))
}

/// Sled-backed asset store, kept in its own `assets` tree.
pub struct SledAssetStore {
    tree: sled::Tree,
}

impl SledAssetStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Self::from_db(&db)
    }

    pub fn from_db(db: &sled::Db) -> Result<Self, StorageError> {
        Ok(Self {
            tree: db.open_tree("assets")?,
        })
    }
}

impl AssetStore for SledAssetStore {
    fn put(&self, id: &AssetId, asset: &StoredAsset) -> Result<(), StorageError> {
        let value = bincode::serialize(asset).map_err(|e| {
            StorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to serialize asset {}: {}", id, e),
            ))
        })?;
        self.tree.insert(id.0.as_bytes(), value)?;
        Ok(())
    }

    fn get(&self, id: &AssetId) -> Result<Option<StoredAsset>, StorageError> {
        match self.tree.get(id.0.as_bytes())? {
            Some(value) => {
                let asset = bincode::deserialize(&value).map_err(|e| {
                    StorageError::IoError(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("Failed to deserialize asset {}: {}", id, e),
                    ))
                })?;
                Ok(Some(asset))
            }
            None => Ok(None),
        }
    }

    fn count(&self) -> Result<usize, StorageError> {
        Ok(self.tree.len())
    }
}

/// In-memory asset store for dry runs and tests.
#[derive(Default)]
pub struct MemoryAssetStore {
    assets: RwLock<BTreeMap<AssetId, StoredAsset>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssetStore for MemoryAssetStore {
    fn put(&self, id: &AssetId, asset: &StoredAsset) -> Result<(), StorageError> {
        self.assets.write().insert(id.clone(), asset.clone());
        Ok(())
    }

    fn get(&self, id: &AssetId) -> Result<Option<StoredAsset>, StorageError> {
        Ok(self.assets.read().get(id).cloned())
    }

    fn count(&self) -> Result<usize, StorageError> {
        Ok(self.assets.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn asset_id_depends_on_name_and_kind() {
        let bytes = b"payload";
        let a = compute_asset_id(AssetKind::Picture, "a.png", bytes);
        let b = compute_asset_id(AssetKind::Picture, "b.png", bytes);
        let c = compute_asset_id(AssetKind::Download, "a.png", bytes);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, compute_asset_id(AssetKind::Picture, "a.png", bytes));
        assert_eq!(a.0.len(), 64);
    }

    #[test]
    fn sled_store_round_trips_picture() {
        let temp_dir = TempDir::new().unwrap();
        let store = SledAssetStore::new(temp_dir.path()).unwrap();

        let id = store
            .insert_picture(&[1, 2, 3], "image/png", "apple-macbook")
            .unwrap();
        let stored = store.get(&id).unwrap().unwrap();
        assert_eq!(stored.kind, AssetKind::Picture);
        assert_eq!(stored.content_type, "image/png");
        assert_eq!(stored.bytes, vec![1, 2, 3]);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn memory_store_deduplicates_identical_assets() {
        let store = MemoryAssetStore::new();
        let first = store.insert_download(b"zip", "application/zip", "a.zip").unwrap();
        let second = store.insert_download(b"zip", "application/zip", "a.zip").unwrap();
        assert_eq!(first, second);
        assert_eq!(store.count().unwrap(), 1);
    }
}
