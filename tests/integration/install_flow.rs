//! End-to-end installation through both entry points

use crate::integration::test_utils::{install_context, installed_at, memory_installer};
use shopseed::config::InstallSettings;
use shopseed::assets::AssetStore;
use shopseed::entity::{
    Category, CompletedStage, Country, Currency, Customer, Product, ProductTag, Setting, Store,
};
use shopseed::error::InstallError;
use shopseed::install::plan::stages_in;
use shopseed::install::{InstallContext, InstallProfile, Phase, StageId};
use shopseed::store::{EntityStore, EntityStoreExt};
use shopseed::types::EntityKind;

#[test]
fn test_required_install_without_sample_data() {
    let run = memory_installer(InstallProfile::default());
    let ctx = install_context(false);

    let early = run.installer.install_early_required_data(&ctx).unwrap();
    let early_ids: Vec<StageId> = early.stages.iter().map(|r| r.stage).collect();
    assert_eq!(
        early_ids,
        vec![
            StageId::Stores,
            StageId::Languages,
            StageId::CustomerRoles,
            StageId::Customers
        ]
    );

    let data = run.installer.install_data(&ctx).unwrap();
    assert_eq!(data.stages.len(), stages_in(Phase::Required).count());
    assert_eq!(data.skipped.len(), stages_in(Phase::Sample).count());
    assert!(data.stages.iter().all(|r| r.phase == Phase::Required));

    assert_eq!(run.store.count(EntityKind::Product).unwrap(), 0);
    assert_eq!(run.store.count(EntityKind::Category).unwrap(), 0);
    assert!(run.store.count(EntityKind::Setting).unwrap() > 0);
    assert!(run.store.count(EntityKind::Country).unwrap() > 0);
    assert_eq!(run.assets.count().unwrap(), 0);

    let journal = run.installer.journal().unwrap();
    assert_eq!(journal.len(), early.stages.len() + data.stages.len());
}

#[test]
fn test_full_install_with_sample_data() {
    let run = memory_installer(InstallProfile::default());
    let summary = run.installer.run_installation(&install_context(true)).unwrap();

    assert!(summary.skipped.is_empty());
    let products = summary.report(StageId::Products).unwrap();
    assert_eq!(products.generated, products.persisted);
    assert_eq!(
        run.store.count(EntityKind::Product).unwrap(),
        products.persisted
    );
    assert!(run.store.count(EntityKind::ProductTag).unwrap() > 0);
    assert!(run.assets.count().unwrap() > 0);

    // every product category link points at a persisted category
    let category_ids: Vec<u64> = run
        .store
        .all::<Category>()
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    for product in run.store.all::<Product>().unwrap() {
        for link in &product.row.categories {
            assert!(category_ids.contains(&link.category_id));
        }
    }
    let product_count = run.store.count(EntityKind::Product).unwrap() as u64;
    for tag in run.store.all::<ProductTag>().unwrap() {
        assert!(tag.row.product_ids.iter().all(|id| *id >= 1 && *id <= product_count));
    }
}

#[test]
fn test_install_data_requires_early_data() {
    let run = memory_installer(InstallProfile::default());
    let err = run.installer.install_data(&install_context(true)).unwrap_err();
    assert!(matches!(err, InstallError::EarlyDataMissing(StageId::Stores)));

    for kind in EntityKind::ALL {
        assert_eq!(run.store.count(*kind).unwrap(), 0, "{} was written", kind);
    }
}

#[test]
fn test_second_install_is_refused() {
    let run = memory_installer(InstallProfile::default());
    let ctx = install_context(false);
    run.installer.run_installation(&ctx).unwrap();
    let settings_before = run.store.count(EntityKind::Setting).unwrap();

    let err = run.installer.install_data(&ctx).unwrap_err();
    assert!(matches!(err, InstallError::StoreNotEmpty(_)));
    let err = run.installer.install_early_required_data(&ctx).unwrap_err();
    assert!(matches!(err, InstallError::StoreNotEmpty(StageId::Stores)));

    assert_eq!(run.store.count(EntityKind::Setting).unwrap(), settings_before);
}

#[test]
fn test_installation_is_deterministic() {
    let first = memory_installer(InstallProfile::default());
    let second = memory_installer(InstallProfile::default());
    let ctx = install_context(true);
    first.installer.run_installation(&ctx).unwrap();
    second.installer.run_installation(&ctx).unwrap();

    for kind in EntityKind::ALL {
        assert_eq!(
            first.store.scan_encoded(*kind).unwrap(),
            second.store.scan_encoded(*kind).unwrap(),
            "{} rows differ between runs",
            kind
        );
    }
}

#[test]
fn test_identity_hooks_change_nothing() {
    let plain = memory_installer(InstallProfile::default());
    let hooked = memory_installer(
        InstallProfile::new("identity")
            .with_hook::<Store, _>(|rows| rows)
            .unwrap()
            .with_hook::<Customer, _>(|rows| rows)
            .unwrap()
            .with_hook::<Currency, _>(|rows| rows)
            .unwrap()
            .with_hook::<Country, _>(|rows| rows)
            .unwrap()
            .with_hook::<Setting, _>(|rows| rows)
            .unwrap()
            .with_hook::<Category, _>(|rows| rows)
            .unwrap()
            .with_hook::<Product, _>(|rows| rows)
            .unwrap(),
    );
    let ctx = install_context(true);
    plain.installer.run_installation(&ctx).unwrap();
    hooked.installer.run_installation(&ctx).unwrap();

    for kind in EntityKind::ALL {
        if *kind == EntityKind::CompletedStage {
            continue;
        }
        assert_eq!(
            plain.store.scan_encoded(*kind).unwrap(),
            hooked.store.scan_encoded(*kind).unwrap(),
            "{} rows differ under identity hooks",
            kind
        );
    }
}

#[test]
fn test_failed_stage_is_not_journaled() {
    // dropping every store breaks customers, the last early stage
    let run = memory_installer(
        InstallProfile::new("no-stores")
            .with_hook::<Store, _>(|_| Vec::new())
            .unwrap(),
    );
    let err = run
        .installer
        .install_early_required_data(&install_context(false))
        .unwrap_err();

    match &err {
        InstallError::StageFailed { stage, .. } => assert_eq!(*stage, StageId::Customers),
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        err.root_cause(),
        InstallError::NotFound {
            kind: EntityKind::Store,
            ..
        }
    ));

    let journal: Vec<StageId> = run
        .store
        .all::<CompletedStage>()
        .unwrap()
        .into_iter()
        .map(|done| done.row.stage)
        .collect();
    assert!(!journal.contains(&StageId::Customers));
    assert_eq!(run.store.count(EntityKind::Customer).unwrap(), 0);
}

#[test]
fn test_irish_locale_is_rejected_with_empty_store() {
    let run = memory_installer(InstallProfile::default());
    let settings = InstallSettings {
        locale: "en-IE".to_string(),
        currency_locales: vec!["en-IE".to_string(), "en-US".to_string()],
        primary_currency_code: "USD".to_string(),
        ..InstallSettings::default()
    };
    let ctx = InstallContext::from_settings(&settings, installed_at());

    let err = run.installer.run_installation(&ctx).unwrap_err();
    assert!(matches!(err, InstallError::UnsupportedContext(_)), "{err}");

    for kind in EntityKind::ALL {
        assert_eq!(run.store.count(*kind).unwrap(), 0, "{kind} rows written");
    }
    assert_eq!(run.assets.count().unwrap(), 0);

    // the same store still accepts a supported context afterwards
    run.installer.run_installation(&install_context(false)).unwrap();
}
