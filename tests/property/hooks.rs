//! Extension hook dispatch over arbitrary rows

use proptest::prelude::*;
use shopseed::entity::{Currency, TaxCategory};
use shopseed::error::InstallError;
use shopseed::hooks::ExtensionHooks;

fn rows(names: &[String]) -> Vec<TaxCategory> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| TaxCategory {
            name: name.clone(),
            display_order: index as i32,
        })
        .collect()
}

/// Unhooked kinds and identity hooks both hand rows back unchanged.
#[test]
fn test_identity_and_missing_hooks_are_transparent() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec("[a-z]{0,10}", 0..30), |names| {
            let input = rows(&names);

            let empty = ExtensionHooks::new();
            prop_assert_eq!(empty.apply(input.clone()), input.clone());

            let mut identity = ExtensionHooks::new();
            identity.register::<TaxCategory, _>(|rows| rows).unwrap();
            prop_assert_eq!(identity.apply(input.clone()), input);
            Ok(())
        })
        .unwrap();
}

/// A hook only ever sees rows of its own kind.
#[test]
fn test_hooks_dispatch_by_kind() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec("[a-z]{1,10}", 0..30), 0usize..30),
            |(names, keep)| {
                let mut hooks = ExtensionHooks::new();
                hooks
                    .register::<TaxCategory, _>(move |mut rows| {
                        rows.truncate(keep);
                        rows
                    })
                    .unwrap();

                let kept = hooks.apply(rows(&names));
                prop_assert_eq!(kept.len(), names.len().min(keep));
                prop_assert!(hooks.apply(Vec::<Currency>::new()).is_empty());
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_second_hook_for_a_kind_is_rejected() {
    let mut hooks = ExtensionHooks::new();
    hooks.register::<TaxCategory, _>(|rows| rows).unwrap();
    assert!(matches!(
        hooks.register::<TaxCategory, _>(|rows| rows),
        Err(InstallError::DuplicateHook(_))
    ));
}
