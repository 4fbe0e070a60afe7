//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global file
//! (`$XDG_CONFIG_HOME/shopseed/config.toml`), then the workspace files
//! (`config/config.toml`, `config/{SHOPSEED_ENV}.toml`), then
//! `SHOPSEED__SECTION__KEY` environment variables.

use crate::install::profile::BUILTIN_PROFILES;
use crate::logging::LoggingConfig;
use chrono::{DateTime, Utc};
use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge;
mod sources;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopseedConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    /// Installation choices
    #[serde(default)]
    pub install: InstallSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// sled database directory; relative paths are taken from the workspace root
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".shopseed/store")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

impl StorageConfig {
    pub fn resolve_store_path(&self, workspace_root: &Path) -> PathBuf {
        if self.store_path.is_absolute() {
            self.store_path.clone()
        } else {
            workspace_root.join(&self.store_path)
        }
    }
}

/// What to install and for whom.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallSettings {
    /// Built-in installation profile name
    pub profile: String,
    pub sample_data: bool,
    pub locale: String,
    pub currency_locales: Vec<String>,
    pub primary_currency_code: String,
    pub store_name: String,
    pub store_url: String,
    pub admin_email: String,
    pub admin_password: String,
    /// Fixed install instant; the current time when unset
    pub installed_at: Option<DateTime<Utc>>,
}

impl Default for InstallSettings {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            sample_data: false,
            locale: "en-US".to_string(),
            currency_locales: ["en-US", "en-AU", "en-GB", "en-CA", "zh-CN", "de-DE", "ja-JP"]
                .iter()
                .map(|locale| locale.to_string())
                .collect(),
            primary_currency_code: "USD".to_string(),
            store_name: "Your store name".to_string(),
            store_url: "http://www.yourstore.com/".to_string(),
            admin_email: "admin@yourstore.com".to_string(),
            admin_password: "admin".to_string(),
            installed_at: None,
        }
    }
}

impl InstallSettings {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !BUILTIN_PROFILES.contains(&self.profile.as_str()) {
            errors.push(format!(
                "Unknown profile '{}' (expected one of: {})",
                self.profile,
                BUILTIN_PROFILES.join(", ")
            ));
        }
        let mut parts = self.locale.split(|c: char| c == '-' || c == '_');
        let language = parts.next().unwrap_or_default();
        let region = parts.next().unwrap_or_default();
        if language.is_empty() || region.len() != 2 {
            errors.push(format!(
                "Locale '{}' must have the form language-REGION",
                self.locale
            ));
        }
        if self.currency_locales.is_empty() {
            errors.push("At least one currency locale is required".to_string());
        }
        if self.primary_currency_code.len() != 3
            || !self
                .primary_currency_code
                .chars()
                .all(|c| c.is_ascii_uppercase())
        {
            errors.push(format!(
                "Primary currency code '{}' must be three upper-case letters",
                self.primary_currency_code
            ));
        }
        if self.store_name.trim().is_empty() {
            errors.push("Store name cannot be empty".to_string());
        }
        if !self.admin_email.contains('@') {
            errors.push(format!(
                "Administrator e-mail '{}' is not an address",
                self.admin_email
            ));
        }
        if self.admin_password.is_empty() {
            errors.push("Administrator password cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Storage(String),
    Install(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Storage(msg) => write!(f, "Storage: {}", msg),
            ValidationError::Install(msg) => write!(f, "Install: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ShopseedConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.storage.store_path.as_os_str().is_empty() {
            errors.push(ValidationError::Storage(
                "Store path cannot be empty".to_string(),
            ));
        }

        if let Err(install_errors) = self.install.validate() {
            errors.extend(install_errors.into_iter().map(ValidationError::Install));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Loads [`ShopseedConfig`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    pub fn load(workspace_root: &Path) -> Result<ShopseedConfig, ConfigError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = sources::environment::add_to_builder(builder);

        builder.build()?.try_deserialize()
    }

    /// Load a single file on top of the defaults, skipping discovery.
    pub fn load_from_file(path: &Path) -> Result<ShopseedConfig, ConfigError> {
        merge::merge_policy::builder_with_defaults()?
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
    }

    /// Location of the global configuration file.
    pub fn xdg_config_path() -> Option<PathBuf> {
        sources::global_file::global_config_path()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        ConfigLoader
    }
}
