//! CLI route: single route table and run context. Dispatches to the installer and presentation.

use crate::assets::{AssetStore, MemoryAssetStore, SledAssetStore};
use crate::cli::parse::{Commands, ConfigCommands, InstallPhase};
use crate::cli::presentation::{
    format_install_summary_json, format_install_summary_text, format_plan_json, format_plan_text,
    format_status_json, format_status_text,
};
use crate::config::{ConfigLoader, InstallSettings, ShopseedConfig};
use crate::culture::StaticCultureCatalog;
use crate::error::{InstallError, StorageError};
use crate::install::plan::{data_stages, stages_in};
use crate::install::{
    collect_status, InstallContext, InstallProfile, Installer, Phase, StageSpec,
};
use crate::store::{EntityStore, MemoryEntityStore, SledEntityStore};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Runtime context for CLI execution: workspace and the loaded configuration.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: ShopseedConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
    ) -> Result<Self, InstallError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        if let Err(errors) = config.validate() {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            return Err(InstallError::ConfigError(messages.join("; ")));
        }

        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &ShopseedConfig {
        &self.config
    }

    pub fn store_path(&self) -> PathBuf {
        self.config.storage.resolve_store_path(&self.workspace_root)
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, InstallError> {
        let started = Instant::now();
        let result = match command {
            Commands::Install {
                phase,
                sample_data,
                locale,
                profile,
                dry_run,
                format,
            } => self.handle_install(
                *phase,
                *sample_data,
                locale.as_deref(),
                profile.as_deref(),
                *dry_run,
                format,
            ),
            Commands::Plan {
                sample_data,
                format,
            } => self.handle_plan(*sample_data || self.config.install.sample_data, format),
            Commands::Status { format } => self.handle_status(format),
            Commands::Config { command } => self.handle_config(command),
        };

        let duration_ms = started.elapsed().as_millis();
        match &result {
            Ok(_) => info!(command = command_name(command), duration_ms, "Command completed"),
            Err(e) => {
                error!(command = command_name(command), duration_ms, error = %e, "Command failed")
            }
        }
        result
    }

    fn handle_install(
        &self,
        phase: InstallPhase,
        sample_data: bool,
        locale: Option<&str>,
        profile: Option<&str>,
        dry_run: bool,
        format: &str,
    ) -> Result<String, InstallError> {
        let settings = self.install_settings(sample_data, locale, profile)?;
        let installed_at = settings.installed_at.unwrap_or_else(Utc::now);
        let context = InstallContext::from_settings(&settings, installed_at);
        let profile = InstallProfile::builtin(&settings.profile)?;

        let store: Arc<dyn EntityStore>;
        let assets: Arc<dyn AssetStore>;
        if dry_run {
            debug!("Dry run: installing into memory");
            store = Arc::new(MemoryEntityStore::new());
            assets = Arc::new(MemoryAssetStore::new());
        } else {
            let (sled_store, sled_assets) = open_sled_stores(&self.store_path())?;
            store = Arc::new(sled_store);
            assets = Arc::new(sled_assets);
        }

        let culture = Arc::new(StaticCultureCatalog::new());
        let installer = Installer::new(store, assets, culture, profile);
        let summary = match phase {
            InstallPhase::Early => installer.install_early_required_data(&context)?,
            InstallPhase::Data => installer.install_data(&context)?,
            InstallPhase::All => installer.run_installation(&context)?,
        };

        match format {
            "json" => format_install_summary_json(&summary, dry_run),
            _ => Ok(format_install_summary_text(&summary, dry_run)),
        }
    }

    /// Install settings with command-line overrides applied and re-validated.
    fn install_settings(
        &self,
        sample_data: bool,
        locale: Option<&str>,
        profile: Option<&str>,
    ) -> Result<InstallSettings, InstallError> {
        let mut settings = self.config.install.clone();
        settings.sample_data |= sample_data;
        if let Some(locale) = locale {
            settings.locale = locale.to_string();
        }
        if let Some(profile) = profile {
            settings.profile = profile.to_string();
        }
        settings
            .validate()
            .map_err(|errors| InstallError::ConfigError(errors.join("; ")))?;
        Ok(settings)
    }

    fn handle_plan(&self, sample_data: bool, format: &str) -> Result<String, InstallError> {
        let stages: Vec<&StageSpec> = stages_in(Phase::EarlyRequired)
            .chain(data_stages(sample_data))
            .collect();
        match format {
            "json" => format_plan_json(&stages),
            _ => Ok(format_plan_text(&stages)),
        }
    }

    fn handle_status(&self, format: &str) -> Result<String, InstallError> {
        let store_path = self.store_path();
        let status = if store_path.exists() {
            let (store, assets) = open_sled_stores(&store_path)?;
            collect_status(&store, &assets)?
        } else {
            collect_status(&MemoryEntityStore::new(), &MemoryAssetStore::new())?
        };
        match format {
            "json" => format_status_json(&status, &store_path),
            _ => Ok(format_status_text(&status, &store_path)),
        }
    }

    fn handle_config(&self, command: &ConfigCommands) -> Result<String, InstallError> {
        match command {
            ConfigCommands::Show => {
                let mut shown = self.config.clone();
                shown.install.admin_password = "********".to_string();
                to_toml(&shown)
            }
            ConfigCommands::Init { force } => {
                let path = self.workspace_root.join("config").join("config.toml");
                if path.exists() && !force {
                    return Err(InstallError::ConfigError(format!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    )));
                }
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| InstallError::StorageError(StorageError::IoError(e)))?;
                }
                std::fs::write(&path, to_toml(&ShopseedConfig::default())?)
                    .map_err(|e| InstallError::StorageError(StorageError::IoError(e)))?;
                Ok(format!("Wrote default configuration to {}", path.display()))
            }
        }
    }
}

fn open_sled_stores(path: &Path) -> Result<(SledEntityStore, SledAssetStore), InstallError> {
    std::fs::create_dir_all(path).map_err(StorageError::IoError)?;
    let db = sled::open(path).map_err(|e| {
        StorageError::Database(format!(
            "Failed to open sled database at {}: {}",
            path.display(),
            e
        ))
    })?;
    let assets = SledAssetStore::from_db(&db)?;
    Ok((SledEntityStore::from_db(db), assets))
}

fn to_toml(config: &ShopseedConfig) -> Result<String, InstallError> {
    toml::to_string_pretty(config)
        .map_err(|e| InstallError::ConfigError(format!("Failed to render configuration: {}", e)))
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Install { .. } => "install",
        Commands::Plan { .. } => "plan",
        Commands::Status { .. } => "status",
        Commands::Config {
            command: ConfigCommands::Show,
        } => "config show",
        Commands::Config {
            command: ConfigCommands::Init { .. },
        } => "config init",
    }
}
