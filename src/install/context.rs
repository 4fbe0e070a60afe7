//! Installation choices handed to every stage.

use crate::config::InstallSettings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the caller asked for. Generators read it but never change it.
#[derive(Clone, Serialize, Deserialize)]
pub struct InstallContext {
    pub install_sample_data: bool,
    /// Culture of the default language, e.g. `en-US`.
    pub locale: String,
    /// One currency row is generated per locale the culture catalog recognizes.
    pub currency_locales: Vec<String>,
    pub primary_currency_code: String,
    pub store_name: String,
    pub store_url: String,
    pub admin_email: String,
    pub admin_password: String,
    /// Every generated timestamp derives from this instant.
    pub installed_at: DateTime<Utc>,
}

impl InstallContext {
    pub fn from_settings(settings: &InstallSettings, installed_at: DateTime<Utc>) -> Self {
        Self {
            install_sample_data: settings.sample_data,
            locale: settings.locale.clone(),
            currency_locales: settings.currency_locales.clone(),
            primary_currency_code: settings.primary_currency_code.clone(),
            store_name: settings.store_name.clone(),
            store_url: settings.store_url.clone(),
            admin_email: settings.admin_email.clone(),
            admin_password: settings.admin_password.clone(),
            installed_at,
        }
    }

    /// Region part of the locale (`US` for `en-US`), upper-cased.
    pub fn region_code(&self) -> Option<String> {
        self.locale
            .split(|c: char| c == '-' || c == '_')
            .nth(1)
            .filter(|region| region.len() == 2)
            .map(|region| region.to_ascii_uppercase())
    }

    /// Language part of the locale (`en` for `en-US`), lower-cased.
    pub fn language_code(&self) -> String {
        self.locale
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

impl fmt::Debug for InstallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstallContext")
            .field("install_sample_data", &self.install_sample_data)
            .field("locale", &self.locale)
            .field("currency_locales", &self.currency_locales)
            .field("primary_currency_code", &self.primary_currency_code)
            .field("store_name", &self.store_name)
            .field("store_url", &self.store_url)
            .field("admin_email", &self.admin_email)
            .field("admin_password", &"<redacted>")
            .field("installed_at", &self.installed_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn context(locale: &str) -> InstallContext {
        let mut settings = InstallSettings::default();
        settings.locale = locale.to_string();
        InstallContext::from_settings(&settings, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn locale_parts() {
        let ctx = context("en-GB");
        assert_eq!(ctx.region_code().as_deref(), Some("GB"));
        assert_eq!(ctx.language_code(), "en");
        assert_eq!(context("fr").region_code(), None);
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", context("en-US"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains(&InstallSettings::default().admin_password));
    }
}
