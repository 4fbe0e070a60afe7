//! Status command presentation: journal and row counts.

use super::shared::{done_marker, format_section_heading, to_json};
use crate::error::InstallError;
use crate::install::{InstallState, StoreStatus};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use std::path::Path;

fn describe(state: &InstallState) -> &'static str {
    match state {
        InstallState::Empty => "empty",
        InstallState::EarlyRequired => "early required data only",
        InstallState::Installed => "installed",
        InstallState::InstalledWithSamples => "installed with sample data",
        InstallState::Partial => "partial (a stage failed or was interrupted)",
    }
}

pub fn format_status_text(status: &StoreStatus, store_path: &Path) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Store Status"));
    out.push_str(&format!("  Store: {}\n", store_path.display()));
    out.push_str(&format!("  State: {}\n", describe(&status.state)));
    out.push_str(&format!("  Rows: {}\n", status.total_rows()));
    out.push_str(&format!("  Assets: {}\n\n", status.assets));

    if status.journal.is_empty() {
        out.push_str("No stage has completed. Run 'shopseed install' to populate the store.\n");
        return out;
    }

    out.push_str(&format!("{}\n\n", format_section_heading("Completed stages")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["", "Stage", "Kind", "Rows", "Completed"]);
    for done in &status.journal {
        table.add_row(vec![
            done_marker(),
            done.stage.to_string(),
            done.produced.to_string(),
            done.rows.to_string(),
            done.completed_at.to_rfc3339(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));

    out.push_str(&format!("{}\n\n", format_section_heading("Rows by kind")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Kind", "Rows"]);
    for count in &status.rows {
        table.add_row(vec![count.kind.to_string(), count.rows.to_string()]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

pub fn format_status_json(status: &StoreStatus, store_path: &Path) -> Result<String, InstallError> {
    let out = serde_json::json!({
        "store": store_path.display().to_string(),
        "state": status.state,
        "total_rows": status.total_rows(),
        "assets": status.assets,
        "journal": status.journal,
        "rows": status.rows,
    });
    to_json(&out)
}
