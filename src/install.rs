//! Installation orchestration: the fixed stage plan, the caller's choices, the
//! profile's hooks and the installer that runs them.

pub mod context;
pub mod installer;
pub mod plan;
pub mod profile;
pub mod status;

pub use context::InstallContext;
pub use installer::{InstallSummary, Installer, StageReport};
pub use plan::{Phase, StageId, StageSpec, INSTALL_PLAN};
pub use profile::{InstallProfile, BUILTIN_PROFILES};
pub use status::{collect_status, InstallState, KindCount, StoreStatus};
