//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::InstallError;

/// Map installation errors to a string for CLI output.
///
/// Stage failures name the stage and the innermost cause; the wrapping chain
/// adds nothing a user can act on.
pub fn map_error(e: &InstallError) -> String {
    match e {
        InstallError::StageFailed { stage, .. } => {
            format!("Stage {} failed: {}", stage, e.root_cause())
        }
        other => other.to_string(),
    }
}
