//! Command-line surface: argument parsing and routed commands

use crate::integration::test_utils::with_xdg_env;
use clap::Parser;
use shopseed::cli::{map_error, Cli, Commands, InstallPhase, RunContext};
use tempfile::TempDir;

fn workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[install]\ninstalled_at = \"2024-03-01T12:00:00Z\"\n\n[logging]\nenabled = false\n",
    )
    .unwrap();
    temp_dir
}

fn run(temp_dir: &TempDir, args: &[&str]) -> Result<String, String> {
    let ws = temp_dir.path().to_string_lossy().to_string();
    let mut argv = vec!["shopseed", "--workspace", ws.as_str()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    // serialized with the tests that set SHOPSEED__* variables
    with_xdg_env(temp_dir, || {
        let context = RunContext::new(cli.workspace.clone(), cli.config.clone())
            .map_err(|e| map_error(&e))?;
        context.execute(&cli.command).map_err(|e| map_error(&e))
    })
}

#[test]
fn test_install_arguments_parse() {
    let cli = Cli::try_parse_from([
        "shopseed",
        "install",
        "--phase",
        "early",
        "--sample-data",
        "--locale",
        "de-DE",
        "--dry-run",
    ])
    .unwrap();
    match cli.command {
        Commands::Install {
            phase,
            sample_data,
            locale,
            dry_run,
            ref format,
            ..
        } => {
            assert_eq!(phase, InstallPhase::Early);
            assert!(sample_data);
            assert_eq!(locale.as_deref(), Some("de-DE"));
            assert!(dry_run);
            assert_eq!(format, "text");
        }
        _ => panic!("expected install"),
    }

    assert!(Cli::try_parse_from(["shopseed", "install", "--phase", "later"]).is_err());
    assert!(Cli::try_parse_from(["shopseed", "--quiet", "--verbose", "status"]).is_err());
}

#[test]
fn test_phased_install_then_status() {
    let temp_dir = workspace();

    let early = run(&temp_dir, &["install", "--phase", "early", "--format", "json"]).unwrap();
    let early: serde_json::Value = serde_json::from_str(&early).unwrap();
    assert_eq!(early["stages"].as_array().unwrap().len(), 4);

    let data = run(&temp_dir, &["install", "--phase", "data", "--format", "json"]).unwrap();
    let data: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert!(!data["skipped"].as_array().unwrap().is_empty());

    let status = run(&temp_dir, &["status", "--format", "json"]).unwrap();
    let status: serde_json::Value = serde_json::from_str(&status).unwrap();
    assert_eq!(status["state"], "installed");

    let again = run(&temp_dir, &["install"]).unwrap_err();
    assert!(again.contains("already contains installed data"));
}

#[test]
fn test_status_of_missing_store_is_empty() {
    let temp_dir = workspace();
    let text = run(&temp_dir, &["status"]).unwrap();
    assert!(text.contains("No stage has completed"));
    assert!(!temp_dir.path().join(".shopseed").exists());
}

#[test]
fn test_plan_text_lists_every_stage() {
    let temp_dir = workspace();
    let text = run(&temp_dir, &["plan", "--sample-data"]).unwrap();
    assert!(text.contains("stores"));
    assert!(text.contains("product-tags"));
}

#[test]
fn test_unsupported_locale_is_refused_before_install() {
    let temp_dir = workspace();
    let err = run(
        &temp_dir,
        &["install", "--locale", "xx-ZZ", "--format", "json"],
    )
    .unwrap_err();
    assert!(err.contains("cannot be seeded"), "{}", err);
    assert!(err.contains("ZZ"), "{}", err);

    let status = run(&temp_dir, &["status", "--format", "json"]).unwrap();
    let status: serde_json::Value = serde_json::from_str(&status).unwrap();
    assert!(status["journal"].as_array().unwrap().is_empty());
}
