//! Store status: which stages have completed and what they left behind.

use crate::assets::AssetStore;
use crate::entity::CompletedStage;
use crate::error::InstallError;
use crate::install::plan::{data_stages, stages_in, Phase, StageId};
use crate::store::{kind_counts, EntityStore, EntityStoreExt};
use crate::types::EntityKind;
use serde::Serialize;

/// Where an installation stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallState {
    /// No stage has completed.
    Empty,
    /// Early required data is in place; `install_data` has not run.
    EarlyRequired,
    /// Required data is in place; sample stages did not run.
    Installed,
    /// Required and sample data are in place.
    InstalledWithSamples,
    /// Some stages are journaled but the set matches no finished entry point.
    Partial,
}

#[derive(Debug, Clone, Serialize)]
pub struct KindCount {
    pub kind: EntityKind,
    pub rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreStatus {
    pub state: InstallState,
    pub journal: Vec<CompletedStage>,
    pub rows: Vec<KindCount>,
    pub assets: usize,
}

impl StoreStatus {
    pub fn total_rows(&self) -> usize {
        self.rows.iter().map(|count| count.rows).sum()
    }
}

/// Read the journal and row counts of a store.
pub fn collect_status(
    store: &dyn EntityStore,
    assets: &dyn AssetStore,
) -> Result<StoreStatus, InstallError> {
    let journal: Vec<CompletedStage> = store
        .all::<CompletedStage>()?
        .into_iter()
        .map(|persisted| persisted.row)
        .collect();
    let completed: Vec<StageId> = journal.iter().map(|done| done.stage).collect();

    let rows = kind_counts(store)?
        .into_iter()
        .filter(|(kind, _)| *kind != EntityKind::CompletedStage)
        .map(|(kind, rows)| KindCount { kind, rows })
        .collect();

    Ok(StoreStatus {
        state: classify(&completed),
        journal,
        rows,
        assets: assets.count()?,
    })
}

fn classify(completed: &[StageId]) -> InstallState {
    let covers = |stages: &[StageId]| {
        stages.len() == completed.len() && stages.iter().all(|id| completed.contains(id))
    };

    if completed.is_empty() {
        return InstallState::Empty;
    }
    let early: Vec<StageId> = stages_in(Phase::EarlyRequired).map(|spec| spec.id).collect();
    if covers(&early) {
        return InstallState::EarlyRequired;
    }

    let with = |sample: bool| {
        early
            .iter()
            .copied()
            .chain(data_stages(sample).into_iter().map(|spec| spec.id))
            .collect::<Vec<_>>()
    };
    if covers(&with(false)) {
        InstallState::Installed
    } else if covers(&with(true)) {
        InstallState::InstalledWithSamples
    } else {
        InstallState::Partial
    }
}
