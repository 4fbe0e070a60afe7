//! Shared presentation helpers: headings, json rendering, stage markers.

use crate::error::InstallError;
use crate::install::Phase;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, InstallError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| InstallError::InvalidData(format!("Failed to render JSON: {}", e)))
}

pub fn phase_label(phase: Phase) -> String {
    match phase {
        Phase::EarlyRequired => format!("{}", phase.yellow()),
        Phase::Required => format!("{}", phase.cyan()),
        Phase::Sample => format!("{}", phase.magenta()),
    }
}

pub fn done_marker() -> String {
    format!("{}", "✓".green())
}

pub fn skipped_marker() -> String {
    format!("{}", "⊘".dimmed())
}
