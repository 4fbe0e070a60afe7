//! Integration tests for Configuration System

use crate::integration::test_utils::with_xdg_env;
use shopseed::config::{ConfigLoader, ShopseedConfig};
use shopseed::install::{InstallContext, InstallProfile};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_file_drives_install_context() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("shopseed.toml");

    std::fs::write(
        &config_file,
        r#"
[storage]
store_path = "/var/lib/shopseed/store"

[install]
profile = "united-kingdom"
sample_data = true
locale = "en-GB"
primary_currency_code = "GBP"
store_name = "Corner Shop"
admin_email = "owner@cornershop.example"
admin_password = "correct horse"
installed_at = "2024-06-01T09:30:00Z"

[logging]
level = "debug"
format = "json"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(
        config.storage.store_path,
        PathBuf::from("/var/lib/shopseed/store")
    );
    assert_eq!(config.logging.format, "json");

    let installed_at = config.install.installed_at.unwrap();
    let context = InstallContext::from_settings(&config.install, installed_at);
    assert!(context.install_sample_data);
    assert_eq!(context.region_code().as_deref(), Some("GB"));
    assert_eq!(context.store_name, "Corner Shop");
    assert!(!format!("{:?}", context).contains("correct horse"));

    let profile = InstallProfile::builtin(&config.install.profile).unwrap();
    assert_eq!(profile.name(), "united-kingdom");
}

#[test]
fn test_invalid_install_section_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("shopseed.toml");
    std::fs::write(
        &config_file,
        "[install]\nlocale = \"english\"\nadmin_email = \"nobody\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_global_file_is_overridden_by_workspace_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    with_xdg_env(&test_dir, || {
        let global_dir = test_dir.path().join("shopseed");
        std::fs::create_dir_all(&global_dir).unwrap();
        std::fs::write(
            global_dir.join("config.toml"),
            "[install]\nstore_name = \"Global store\"\nadmin_email = \"global@example.com\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.install.store_name, "Global store");

        let config_dir = workspace.path().join("config");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "[install]\nstore_name = \"Workspace store\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.install.store_name, "Workspace store");
        assert_eq!(config.install.admin_email, "global@example.com");
    });
}

#[test]
fn test_environment_overrides_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    with_xdg_env(&test_dir, || {
        std::env::set_var("SHOPSEED__INSTALL__LOCALE", "de-DE");
        std::env::set_var("SHOPSEED__INSTALL__CURRENCY_LOCALES", "de-DE,en-US");
        std::env::set_var("SHOPSEED__INSTALL__SAMPLE_DATA", "true");
        let config = ConfigLoader::load(workspace.path());
        std::env::remove_var("SHOPSEED__INSTALL__LOCALE");
        std::env::remove_var("SHOPSEED__INSTALL__CURRENCY_LOCALES");
        std::env::remove_var("SHOPSEED__INSTALL__SAMPLE_DATA");

        let config = config.unwrap();
        assert_eq!(config.install.locale, "de-DE");
        assert_eq!(config.install.currency_locales, vec!["de-DE", "en-US"]);
        assert!(config.install.sample_data);
    });
}

#[test]
fn test_defaults_without_any_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    let config = with_xdg_env(&test_dir, || ConfigLoader::load(workspace.path()).unwrap());
    let defaults = ShopseedConfig::default();
    assert_eq!(config.install.locale, defaults.install.locale);
    assert_eq!(config.storage.store_path, defaults.storage.store_path);
    assert!(!config.install.sample_data);
}
