//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("storage.store_path", ".shopseed/store")?
        .set_default("install.profile", "default")?
        .set_default("install.locale", "en-US")?
        .set_default("install.primary_currency_code", "USD")?
        .set_default("logging.level", "info")
}
