//! Installation profiles: a name plus the extension hooks it registers.

use crate::entity::{Country, Currency, Entity, TaxCategory};
use crate::error::InstallError;
use crate::hooks::ExtensionHooks;

/// Names accepted by [`InstallProfile::builtin`].
pub const BUILTIN_PROFILES: &[&str] = &["default", "united-kingdom"];

pub struct InstallProfile {
    name: String,
    hooks: ExtensionHooks,
}

impl InstallProfile {
    /// A profile with no hooks: every generator's output is persisted as is.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hooks: ExtensionHooks::new(),
        }
    }

    pub fn with_hook<T, F>(mut self, hook: F) -> Result<Self, InstallError>
    where
        T: Entity,
        F: Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static,
    {
        self.hooks.register::<T, F>(hook)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hooks(&self) -> &ExtensionHooks {
        &self.hooks
    }

    pub fn builtin(name: &str) -> Result<Self, InstallError> {
        match name {
            "default" => Ok(Self::new("default")),
            "united-kingdom" => united_kingdom(),
            other => Err(InstallError::ConfigError(format!(
                "Unknown installation profile '{}' (expected one of: {})",
                other,
                BUILTIN_PROFILES.join(", ")
            ))),
        }
    }
}

impl Default for InstallProfile {
    fn default() -> Self {
        Self::new("default")
    }
}

/// UK storefront: sterling published, the United Kingdom listed first, and a
/// zero-rated VAT category next to the stock ones.
///
/// The store's primary currency stays published when it is not sterling.
fn united_kingdom() -> Result<InstallProfile, InstallError> {
    InstallProfile::new("united-kingdom")
        .with_hook::<Currency, _>(|mut currencies| {
            for currency in &mut currencies {
                // the primary currency is the one with rate 1
                currency.published = currency.currency_code == "GBP" || currency.rate == 1.0;
            }
            currencies
        })?
        .with_hook::<Country, _>(|mut countries| {
            for country in &mut countries {
                if country.two_letter_iso_code == "GB" {
                    country.display_order = 0;
                }
            }
            countries
        })?
        .with_hook::<TaxCategory, _>(|mut categories| {
            let next_order = categories
                .iter()
                .map(|c| c.display_order)
                .max()
                .unwrap_or(0)
                + 1;
            categories.push(TaxCategory {
                name: "Zero rated".to_string(),
                display_order: next_order,
            });
            categories
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntityKind;

    #[test]
    fn default_profile_has_no_hooks() {
        let profile = InstallProfile::builtin("default").unwrap();
        assert!(profile.hooks().kinds().is_empty());
    }

    #[test]
    fn united_kingdom_profile_hooks_three_kinds() {
        let profile = InstallProfile::builtin("united-kingdom").unwrap();
        assert_eq!(
            profile.hooks().kinds(),
            vec![EntityKind::TaxCategory, EntityKind::Currency, EntityKind::Country]
        );

        let taxes = profile.hooks().apply(vec![TaxCategory {
            name: "Books".to_string(),
            display_order: 3,
        }]);
        assert_eq!(taxes.len(), 2);
        assert_eq!(taxes[1].name, "Zero rated");
        assert_eq!(taxes[1].display_order, 4);
    }

    #[test]
    fn united_kingdom_keeps_primary_currency_published() {
        let currency = |code: &str, rate: f64| Currency {
            name: code.to_string(),
            currency_code: code.to_string(),
            rate,
            display_locale: String::new(),
            custom_formatting: String::new(),
            published: true,
            display_order: 1,
            rounding_type: crate::entity::RoundingType::Rounding001,
        };
        let profile = InstallProfile::builtin("united-kingdom").unwrap();
        let currencies = profile.hooks().apply(vec![
            currency("USD", 1.0),
            currency("GBP", 0.79),
            currency("EUR", 0.92),
        ]);

        let published: Vec<&str> = currencies
            .iter()
            .filter(|c| c.published)
            .map(|c| c.currency_code.as_str())
            .collect();
        assert_eq!(published, vec!["USD", "GBP"]);
    }

    #[test]
    fn unknown_profile_is_config_error() {
        assert!(matches!(
            InstallProfile::builtin("mars"),
            Err(InstallError::ConfigError(_))
        ));
    }
}
