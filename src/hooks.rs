//! Extension hooks
//!
//! A dispatch table from [`EntityKind`] to a function that rewrites the
//! generated rows of that kind before they are persisted. Kinds without a
//! registered hook pass through unchanged.

use crate::entity::Entity;
use crate::error::InstallError;
use crate::types::EntityKind;
use std::any::Any;
use std::collections::BTreeMap;

type HookFn<T> = Box<dyn Fn(Vec<T>) -> Vec<T> + Send + Sync>;

#[derive(Default)]
pub struct ExtensionHooks {
    // Each value is a `HookFn<T>` for the `T` whose `KIND` is the key.
    hooks: BTreeMap<EntityKind, Box<dyn Any + Send + Sync>>,
}

impl ExtensionHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the hook for `T`. A kind takes at most one hook.
    pub fn register<T, F>(&mut self, hook: F) -> Result<(), InstallError>
    where
        T: Entity,
        F: Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static,
    {
        if self.hooks.contains_key(&T::KIND) {
            return Err(InstallError::DuplicateHook(T::KIND));
        }
        let hook: HookFn<T> = Box::new(hook);
        self.hooks.insert(T::KIND, Box::new(hook));
        Ok(())
    }

    /// Run the hook for `T` over `rows`, or return them untouched.
    pub fn apply<T: Entity>(&self, rows: Vec<T>) -> Vec<T> {
        match self
            .hooks
            .get(&T::KIND)
            .and_then(|hook| hook.downcast_ref::<HookFn<T>>())
        {
            Some(hook) => hook(rows),
            None => rows,
        }
    }

    pub fn has_hook(&self, kind: EntityKind) -> bool {
        self.hooks.contains_key(&kind)
    }

    pub fn kinds(&self) -> Vec<EntityKind> {
        self.hooks.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Currency, RoundingType, TaxCategory};

    fn taxes() -> Vec<TaxCategory> {
        vec![
            TaxCategory {
                name: "Books".to_string(),
                display_order: 1,
            },
            TaxCategory {
                name: "Apparel".to_string(),
                display_order: 2,
            },
        ]
    }

    #[test]
    fn unregistered_kind_is_identity() {
        let hooks = ExtensionHooks::new();
        assert_eq!(hooks.apply(taxes()), taxes());
    }

    #[test]
    fn hook_only_applies_to_its_kind() {
        let mut hooks = ExtensionHooks::new();
        hooks
            .register::<TaxCategory, _>(|mut rows| {
                rows.retain(|t| t.name != "Books");
                rows
            })
            .unwrap();

        assert_eq!(hooks.apply(taxes()).len(), 1);

        let currency = Currency {
            name: "Euro".to_string(),
            currency_code: "EUR".to_string(),
            rate: 0.9,
            display_locale: "de-DE".to_string(),
            custom_formatting: String::new(),
            published: true,
            display_order: 1,
            rounding_type: RoundingType::Rounding001,
        };
        assert_eq!(hooks.apply(vec![currency.clone()]), vec![currency]);
        assert!(hooks.has_hook(EntityKind::TaxCategory));
        assert!(!hooks.has_hook(EntityKind::Currency));
    }

    #[test]
    fn second_registration_for_kind_is_rejected() {
        let mut hooks = ExtensionHooks::new();
        hooks.register::<TaxCategory, _>(|rows| rows).unwrap();
        let err = hooks.register::<TaxCategory, _>(|rows| rows).unwrap_err();
        assert!(matches!(err, InstallError::DuplicateHook(EntityKind::TaxCategory)));
    }
}
