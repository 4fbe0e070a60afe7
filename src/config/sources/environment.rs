//! Environment source: SHOPSEED__SECTION__KEY=value

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

pub const PREFIX: &str = "SHOPSEED";

/// Add environment overrides, highest precedence of all sources.
/// `SHOPSEED__INSTALL__CURRENCY_LOCALES` takes a comma-separated list.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(PREFIX)
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("install.currency_locales"),
    )
}
