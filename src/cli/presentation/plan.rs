//! Plan command presentation.

use super::shared::{format_section_heading, phase_label, to_json};
use crate::error::InstallError;
use crate::install::StageSpec;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

pub fn format_plan_text(stages: &[&StageSpec]) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Installation plan"));
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Stage", "Phase", "Produces", "Reads"]);
    for (index, spec) in stages.iter().enumerate() {
        let reads = if spec.reads.is_empty() {
            "-".to_string()
        } else {
            spec.reads
                .iter()
                .map(|kind| kind.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            (index + 1).to_string(),
            spec.id.to_string(),
            phase_label(spec.phase),
            spec.produces.to_string(),
            reads,
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

pub fn format_plan_json(stages: &[&StageSpec]) -> Result<String, InstallError> {
    to_json(stages)
}
