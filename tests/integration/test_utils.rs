//! Shared test utilities for integration tests
//!
//! Provides isolated XDG directories plus the stores and contexts most
//! installation tests start from.

use chrono::{DateTime, TimeZone, Utc};
use shopseed::assets::MemoryAssetStore;
use shopseed::config::InstallSettings;
use shopseed::culture::StaticCultureCatalog;
use shopseed::install::{InstallContext, InstallProfile, Installer};
use shopseed::store::MemoryEntityStore;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Global mutex to serialize XDG environment variable access across all tests
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
        }
    }

    fn restore(self) {
        if let Some(orig) = self.home {
            std::env::set_var("HOME", orig);
        } else {
            std::env::remove_var("HOME");
        }

        if let Some(orig) = self.xdg_config_home {
            std::env::set_var("XDG_CONFIG_HOME", orig);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }
}

/// Run `f` with XDG_CONFIG_HOME pointing at `test_dir` and HOME at `test_dir/home`.
///
/// The original environment is restored afterwards. A global mutex keeps
/// parallel tests from seeing each other's variables.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_dir.path().to_str().unwrap());

    let result = f();

    env_state.restore();

    result
}

pub fn installed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub fn install_context(sample_data: bool) -> InstallContext {
    let settings = InstallSettings {
        sample_data,
        ..InstallSettings::default()
    };
    InstallContext::from_settings(&settings, installed_at())
}

/// An installer over fresh in-memory stores, with handles to inspect them.
pub struct MemoryInstall {
    pub store: Arc<MemoryEntityStore>,
    pub assets: Arc<MemoryAssetStore>,
    pub installer: Installer,
}

pub fn memory_installer(profile: InstallProfile) -> MemoryInstall {
    let store = Arc::new(MemoryEntityStore::new());
    let assets = Arc::new(MemoryAssetStore::new());
    let installer = Installer::new(
        store.clone(),
        assets.clone(),
        Arc::new(StaticCultureCatalog::new()),
        profile,
    );
    MemoryInstall {
        store,
        assets,
        installer,
    }
}
