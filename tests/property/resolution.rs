//! Natural-key resolution over arbitrary row sets

use proptest::prelude::*;
use shopseed::entity::TaxCategory;
use shopseed::error::InstallError;
use shopseed::generate::catalog::seo_name;
use shopseed::resolve::NaturalKeyResolver;
use shopseed::store::{EntityStoreExt, MemoryEntityStore};
use shopseed::types::NaturalKey;
use std::collections::BTreeSet;

fn tax_categories(names: &[String]) -> MemoryEntityStore {
    let store = MemoryEntityStore::new();
    for (index, name) in names.iter().enumerate() {
        store
            .insert(&TaxCategory {
                name: name.clone(),
                display_order: index as i32,
            })
            .unwrap();
    }
    store
}

proptest! {
    /// Every unique name resolves to the id of the row that carries it.
    #[test]
    fn unique_names_resolve_to_their_row(
        names in prop::collection::btree_set("[A-Za-z ]{1,12}", 1..20),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let store = tax_categories(&names);
        let resolver = NaturalKeyResolver::new(&store);

        for (index, name) in names.iter().enumerate() {
            let id = resolver.resolve_id::<TaxCategory>(NaturalKey::name(name.as_str())).unwrap();
            prop_assert_eq!(id, index as u64 + 1);
        }
    }

    /// A name carried by two rows never silently picks one of them.
    #[test]
    fn duplicated_names_are_ambiguous(
        names in prop::collection::btree_set("[a-z]{1,8}", 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut names: Vec<String> = names.into_iter().collect();
        let duplicate = names[pick.index(names.len())].clone();
        names.push(duplicate.clone());
        let store = tax_categories(&names);

        let result = NaturalKeyResolver::new(&store)
            .resolve::<TaxCategory>(NaturalKey::name(duplicate));
        let is_ambiguous = matches!(result, Err(InstallError::Ambiguous { count: 2, .. }));
        prop_assert!(is_ambiguous);
    }

    /// Names absent from the store are reported as missing.
    #[test]
    fn absent_names_are_not_found(
        names in prop::collection::btree_set("[a-z]{1,8}", 0..10),
        absent in "[A-Z]{1,8}",
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let store = tax_categories(&names);
        let result = NaturalKeyResolver::new(&store)
            .resolve_id::<TaxCategory>(NaturalKey::name(absent));
        let is_not_found = matches!(result, Err(InstallError::NotFound { .. }));
        prop_assert!(is_not_found);
    }

    #[test]
    fn seo_names_are_url_safe(name in ".{0,40}") {
        let slug = seo_name(&name);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }
}

#[test]
fn test_distinct_keys_of_one_row_agree() {
    let store = tax_categories(&["Books".to_string(), "Apparel".to_string()]);
    let resolver = NaturalKeyResolver::new(&store);
    let by_name: BTreeSet<u64> = ["Books", "Apparel"]
        .iter()
        .map(|name| resolver.resolve_id::<TaxCategory>(NaturalKey::name(*name)).unwrap())
        .collect();
    let by_order: BTreeSet<u64> = [0, 1]
        .iter()
        .map(|order| {
            resolver
                .resolve_id::<TaxCategory>(NaturalKey::DisplayOrder(*order))
                .unwrap()
        })
        .collect();
    assert_eq!(by_name, by_order);
}
