//! Installation profiles applied to a full install

use crate::integration::test_utils::{installed_at, memory_installer};
use shopseed::config::InstallSettings;
use shopseed::entity::{Country, Currency, TaxCategory};
use shopseed::install::{InstallContext, InstallProfile, StageId};
use shopseed::store::EntityStoreExt;

fn british_context() -> InstallContext {
    let settings = InstallSettings {
        profile: "united-kingdom".to_string(),
        locale: "en-GB".to_string(),
        primary_currency_code: "GBP".to_string(),
        store_name: "Corner Shop".to_string(),
        store_url: "https://cornershop.example.co.uk/".to_string(),
        ..InstallSettings::default()
    };
    InstallContext::from_settings(&settings, installed_at())
}

#[test]
fn test_united_kingdom_profile_install() {
    let run = memory_installer(InstallProfile::builtin("united-kingdom").unwrap());
    let summary = run.installer.run_installation(&british_context()).unwrap();
    assert_eq!(summary.profile, "united-kingdom");

    let published: Vec<String> = run
        .store
        .query(|c: &Currency| c.published)
        .unwrap()
        .into_iter()
        .map(|c| c.row.currency_code)
        .collect();
    assert_eq!(published, vec!["GBP"]);

    let mut countries: Vec<Country> = run
        .store
        .all::<Country>()
        .unwrap()
        .into_iter()
        .map(|c| c.row)
        .collect();
    countries.sort_by_key(|c| c.display_order);
    assert_eq!(countries[0].two_letter_iso_code, "GB");

    let taxes = summary.report(StageId::TaxCategories).unwrap();
    assert_eq!(taxes.persisted, taxes.generated + 1);
    assert_eq!(
        run.store
            .query(|t: &TaxCategory| t.name == "Zero rated")
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_united_kingdom_profile_keeps_dollar_primary_published() {
    let run = memory_installer(InstallProfile::builtin("united-kingdom").unwrap());
    let settings = InstallSettings {
        profile: "united-kingdom".to_string(),
        ..InstallSettings::default()
    };
    let ctx = InstallContext::from_settings(&settings, installed_at());
    assert_eq!(ctx.primary_currency_code, "USD");
    run.installer.run_installation(&ctx).unwrap();

    let published: Vec<String> = run
        .store
        .query(|c: &Currency| c.published)
        .unwrap()
        .into_iter()
        .map(|c| c.row.currency_code)
        .collect();
    assert_eq!(published, vec!["USD", "GBP"]);
}

#[test]
fn test_custom_hook_sees_generated_rows_in_order() {
    let run = memory_installer(
        InstallProfile::new("reverse")
            .with_hook::<TaxCategory, _>(|mut rows| {
                rows.reverse();
                rows
            })
            .unwrap(),
    );
    let plain = memory_installer(InstallProfile::default());
    let ctx = british_context();
    run.installer.run_installation(&ctx).unwrap();
    plain.installer.run_installation(&ctx).unwrap();

    let names = |store: &dyn shopseed::store::EntityStore| -> Vec<String> {
        store
            .all::<TaxCategory>()
            .unwrap()
            .into_iter()
            .map(|t| t.row.name)
            .collect()
    };
    let mut reversed = names(run.store.as_ref());
    reversed.reverse();
    assert_eq!(reversed, names(plain.store.as_ref()));
}
