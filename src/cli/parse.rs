//! CLI parse: clap types for shopseed. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// shopseed CLI - Storefront installation bootstrap
#[derive(Parser)]
#[command(name = "shopseed")]
#[command(about = "Populate an empty storefront data store with required and sample data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', default_value = "false", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Which entry point `install` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InstallPhase {
    /// Early required data only
    Early,
    /// Required data, plus sample data when requested
    Data,
    /// Both, in order
    All,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install into the configured store
    Install {
        /// Entry point to run
        #[arg(long, value_enum, default_value_t = InstallPhase::All)]
        phase: InstallPhase,
        /// Also install sample catalog and content
        #[arg(long)]
        sample_data: bool,
        /// Default locale (overrides install.locale)
        #[arg(long)]
        locale: Option<String>,
        /// Installation profile (overrides install.profile)
        #[arg(long)]
        profile: Option<String>,
        /// Run against an in-memory store and discard the result
        #[arg(long)]
        dry_run: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the installation plan in execution order
    Plan {
        /// Include sample stages
        #[arg(long)]
        sample_data: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show completed stages and row counts of the configured store
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration to config/config.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
