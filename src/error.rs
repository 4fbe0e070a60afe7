//! Error types for the installation bootstrap.

use crate::install::plan::StageId;
use crate::types::{EntityKind, NaturalKey};
use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Failed to encode {kind} row: {message}")]
    Encode { kind: EntityKind, message: String },

    #[error("Failed to decode {kind} row: {message}")]
    Decode { kind: EntityKind, message: String },
}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}

/// Installation errors.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("No {kind} row matches {key}")]
    NotFound { kind: EntityKind, key: NaturalKey },

    #[error("{count} {kind} rows match {key}; natural keys must be unique")]
    Ambiguous {
        kind: EntityKind,
        key: NaturalKey,
        count: usize,
    },

    #[error("Stage {stage} reads {kind} rows but no completed stage produced them")]
    StageNotRun { stage: StageId, kind: EntityKind },

    #[error("Stage {stage} failed: {source}")]
    StageFailed {
        stage: StageId,
        #[source]
        source: Box<InstallError>,
    },

    #[error("Early required stage {0} has not completed; run it before installing data")]
    EarlyDataMissing(StageId),

    #[error("An extension hook for {0} is already registered")]
    DuplicateHook(EntityKind),

    #[error("Store already contains installed data (stage {0} completed)")]
    StoreNotEmpty(StageId),

    #[error("Installation context cannot be seeded: {0}")]
    UnsupportedContext(String),

    #[error("Invalid installation plan: {0}")]
    InvalidPlan(String),

    #[error("Invalid generated data: {0}")]
    InvalidData(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl InstallError {
    /// The innermost error, unwrapping stage context.
    pub fn root_cause(&self) -> &InstallError {
        match self {
            InstallError::StageFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<config::ConfigError> for InstallError {
    fn from(err: config::ConfigError) -> Self {
        InstallError::ConfigError(err.to_string())
    }
}
