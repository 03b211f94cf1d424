//! Loader error types.

use std::path::PathBuf;

use crate::domain::{DomainError, InvalidStationId};

/// A failure that aborts a whole load attempt.
///
/// No network is produced when this is returned; any network the caller
/// already holds is unaffected.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The record source could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV source is structurally broken
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header lacks required columns
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),

    /// A required field is empty in every record
    #[error("required field {0} is missing from every record")]
    MissingField(&'static str),

    /// Every record was rejected, or there were none
    #[error("no usable station records")]
    NoStations,
}

/// Why a single record was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    InvalidId(#[from] InvalidStationId),

    #[error(transparent)]
    Rejected(#[from] DomainError),
}
