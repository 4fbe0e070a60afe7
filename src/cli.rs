//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; single route table dispatches to the installer.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands, InstallPhase};
pub use presentation::{
    format_install_summary_json, format_install_summary_text, format_plan_json,
    format_plan_text, format_section_heading, format_status_json, format_status_text,
};
pub use route::RunContext;
