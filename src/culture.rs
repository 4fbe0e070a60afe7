//! Culture metadata collaborator
//!
//! Resolves a locale tag (`en-US`) to the display name and ISO 4217 code of the
//! currency used there. Lookups that fail are not errors; callers decide what
//! an unknown tag means.

use std::collections::HashMap;

/// Currency facts for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultureInfo {
    pub locale: String,
    pub currency_name: String,
    pub currency_code: String,
}

pub trait CultureMetadata: Send + Sync {
    /// `None` when the tag is malformed or unknown.
    fn lookup(&self, locale: &str) -> Option<CultureInfo>;
}

/// Built-in table of the locales a storefront is commonly installed for.
const KNOWN_CULTURES: &[(&str, &str, &str)] = &[
    ("en-US", "US Dollar", "USD"),
    ("en-AU", "Australian Dollar", "AUD"),
    ("en-GB", "British Pound", "GBP"),
    ("en-CA", "Canadian Dollar", "CAD"),
    ("en-IN", "Indian Rupee", "INR"),
    ("en-NZ", "New Zealand Dollar", "NZD"),
    ("zh-CN", "Chinese Yuan Renminbi", "CNY"),
    ("zh-HK", "Hong Kong Dollar", "HKD"),
    ("de-DE", "Euro", "EUR"),
    ("fr-FR", "Euro", "EUR"),
    ("es-ES", "Euro", "EUR"),
    ("it-IT", "Euro", "EUR"),
    ("nl-NL", "Euro", "EUR"),
    ("ja-JP", "Japanese Yen", "JPY"),
    ("ru-RU", "Russian Ruble", "RUB"),
    ("sv-SE", "Swedish Krona", "SEK"),
    ("nb-NO", "Norwegian Krone", "NOK"),
    ("da-DK", "Danish Krone", "DKK"),
    ("pl-PL", "Polish Zloty", "PLN"),
    ("tr-TR", "Turkish Lira", "TRY"),
    ("pt-BR", "Brazilian Real", "BRL"),
    ("de-CH", "Swiss Franc", "CHF"),
];

/// [`CultureMetadata`] backed by a static table. Tags are matched case-insensitively.
pub struct StaticCultureCatalog {
    cultures: HashMap<String, (String, String)>,
}

impl StaticCultureCatalog {
    pub fn new() -> Self {
        let cultures = KNOWN_CULTURES
            .iter()
            .map(|(locale, name, code)| {
                (
                    locale.to_ascii_lowercase(),
                    (name.to_string(), code.to_string()),
                )
            })
            .collect();
        Self { cultures }
    }

    /// Add or replace a locale entry.
    pub fn with_culture(mut self, locale: &str, currency_name: &str, currency_code: &str) -> Self {
        self.cultures.insert(
            locale.to_ascii_lowercase(),
            (currency_name.to_string(), currency_code.to_string()),
        );
        self
    }
}

impl Default for StaticCultureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CultureMetadata for StaticCultureCatalog {
    fn lookup(&self, locale: &str) -> Option<CultureInfo> {
        let tag = locale.trim();
        if !is_well_formed(tag) {
            return None;
        }
        let canonical = canonical_tag(tag);
        self.cultures
            .get(&canonical.to_ascii_lowercase())
            .map(|(name, code)| CultureInfo {
                locale: canonical,
                currency_name: name.clone(),
                currency_code: code.clone(),
            })
    }
}

/// `ll-RR` with a two or three letter language and a two letter region.
fn is_well_formed(tag: &str) -> bool {
    let mut parts = tag.split(|c: char| c == '-' || c == '_');
    let language = parts.next().unwrap_or_default();
    let region = parts.next().unwrap_or_default();
    parts.next().is_none()
        && (2..=3).contains(&language.len())
        && language.chars().all(|c| c.is_ascii_alphabetic())
        && region.len() == 2
        && region.chars().all(|c| c.is_ascii_alphabetic())
}

fn canonical_tag(tag: &str) -> String {
    let split = tag
        .find(|c: char| c == '-' || c == '_')
        .unwrap_or(tag.len());
    let (language, region) = tag.split_at(split);
    format!(
        "{}-{}",
        language.to_ascii_lowercase(),
        region.trim_start_matches(|c: char| c == '-' || c == '_').to_ascii_uppercase()
    )
}
