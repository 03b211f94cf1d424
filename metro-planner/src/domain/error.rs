//! Domain error types.
//!
//! These errors represent attempts to build an inconsistent network.
//! The loader turns them into per-record warnings.

use super::StationId;

/// Errors raised while adding stations to a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A station with this id already exists
    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    /// The line name is empty
    #[error("line name must not be empty")]
    EmptyLineName,

    /// The station name is empty
    #[error("station name must not be empty")]
    EmptyStationName,
}
