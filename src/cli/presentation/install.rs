//! Install command presentation: per-stage summary.

use super::shared::{done_marker, format_section_heading, phase_label, skipped_marker, to_json};
use crate::error::InstallError;
use crate::install::InstallSummary;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_install_summary_text(summary: &InstallSummary, dry_run: bool) -> String {
    let title = if dry_run {
        "Installation (dry run)"
    } else {
        "Installation"
    };
    let mut out = format!("{}\n\n", format_section_heading(title));
    out.push_str(&format!("  Profile: {}\n", summary.profile));
    out.push_str(&format!("  Stages: {}\n", summary.stages.len()));
    out.push_str(&format!("  Rows persisted: {}\n\n", summary.total_persisted()));

    if !summary.stages.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["", "Stage", "Phase", "Kind", "Generated", "Persisted"]);
        for report in &summary.stages {
            table.add_row(vec![
                done_marker(),
                report.stage.to_string(),
                phase_label(report.phase),
                report.produced.to_string(),
                report.generated.to_string(),
                report.persisted.to_string(),
            ]);
        }
        out.push_str(&format!("{}\n", table));
    }

    if !summary.skipped.is_empty() {
        out.push_str("\nSkipped sample stages (pass --sample-data to install them):\n");
        for stage in &summary.skipped {
            out.push_str(&format!("  {} {}\n", skipped_marker(), stage));
        }
    }
    if dry_run {
        out.push_str("\nNothing was written; the store was in memory.\n");
    }
    out
}

pub fn format_install_summary_json(
    summary: &InstallSummary,
    dry_run: bool,
) -> Result<String, InstallError> {
    let out = serde_json::json!({
        "dry_run": dry_run,
        "profile": summary.profile,
        "rows_persisted": summary.total_persisted(),
        "stages": summary.stages,
        "skipped": summary.skipped,
    });
    to_json(&out)
}
