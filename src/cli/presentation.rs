//! CLI presentation: text and json formatters per command family.

mod install;
mod plan;
mod shared;
mod status;

pub use install::{format_install_summary_json, format_install_summary_text};
pub use plan::{format_plan_json, format_plan_text};
pub use shared::format_section_heading;
pub use status::{format_status_json, format_status_text};
