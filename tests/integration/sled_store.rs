//! Installation against the sled-backed stores

use crate::integration::test_utils::install_context;
use shopseed::assets::{AssetStore, SledAssetStore};
use shopseed::culture::StaticCultureCatalog;
use shopseed::entity::{Product, TaxCategory};
use shopseed::error::InstallError;
use shopseed::install::{collect_status, InstallProfile, InstallState, Installer, StageId};
use shopseed::store::{EntityStore, EntityStoreExt, SledEntityStore};
use shopseed::types::{EntityKind, NaturalKey};
use shopseed::resolve::NaturalKeyResolver;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn sled_installer(path: &Path) -> (Arc<SledEntityStore>, Arc<SledAssetStore>, Installer) {
    let db = sled::open(path).unwrap();
    let store = Arc::new(SledEntityStore::from_db(db.clone()));
    let assets = Arc::new(SledAssetStore::from_db(&db).unwrap());
    let installer = Installer::new(
        store.clone(),
        assets.clone(),
        Arc::new(StaticCultureCatalog::new()),
        InstallProfile::default(),
    );
    (store, assets, installer)
}

#[test]
fn test_entry_points_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store");
    let ctx = install_context(true);

    {
        let (_, _, installer) = sled_installer(&path);
        installer.install_early_required_data(&ctx).unwrap();
    }

    let (store, assets, installer) = sled_installer(&path);
    assert_eq!(
        collect_status(store.as_ref(), assets.as_ref()).unwrap().state,
        InstallState::EarlyRequired
    );

    installer.install_data(&ctx).unwrap();
    let status = collect_status(store.as_ref(), assets.as_ref()).unwrap();
    assert_eq!(status.state, InstallState::InstalledWithSamples);
    assert!(assets.count().unwrap() > 0);
    assert!(store.count(EntityKind::Product).unwrap() > 0);
}

#[test]
fn test_row_ids_follow_insertion_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledEntityStore::new(temp_dir.path()).unwrap();
    let names = ["Books", "Apparel", "Jewelry"];
    for (index, name) in names.iter().enumerate() {
        let id = store
            .insert(&TaxCategory {
                name: name.to_string(),
                display_order: index as i32,
            })
            .unwrap();
        assert_eq!(id, index as u64 + 1);
    }

    let resolver = NaturalKeyResolver::new(&store);
    assert_eq!(
        resolver
            .resolve_id::<TaxCategory>(NaturalKey::name("Apparel"))
            .unwrap(),
        2
    );
    assert!(matches!(
        resolver.resolve::<Product>(NaturalKey::code("AP_MBP_13")),
        Err(InstallError::NotFound {
            kind: EntityKind::Product,
            ..
        })
    ));
}

#[test]
fn test_store_not_empty_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store");
    let ctx = install_context(false);

    {
        let (_, _, installer) = sled_installer(&path);
        installer.run_installation(&ctx).unwrap();
    }

    let (store, _, installer) = sled_installer(&path);
    let settings = store.count(EntityKind::Setting).unwrap();
    assert!(matches!(
        installer.install_data(&ctx),
        Err(InstallError::StoreNotEmpty(_))
    ));
    assert!(matches!(
        installer.install_early_required_data(&ctx),
        Err(InstallError::StoreNotEmpty(StageId::Stores))
    ));
    assert_eq!(store.count(EntityKind::Setting).unwrap(), settings);
}
