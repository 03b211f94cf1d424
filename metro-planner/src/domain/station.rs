//! Station identifiers and station nodes.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id {input:?}: {reason}")]
pub struct InvalidStationId {
    input: String,
    reason: &'static str,
}

/// A station identifier: a positive integer, unique across the network.
///
/// Station ids are assigned by the record source and never change for the
/// lifetime of a [`Network`](super::Network).
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationId;
///
/// let id = StationId::parse(" 42 ").unwrap();
/// assert_eq!(id.get(), 42);
///
/// // Zero and negative values are rejected
/// assert!(StationId::parse("0").is_err());
/// assert!(StationId::parse("-3").is_err());
/// assert!(StationId::parse("abc").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(u32);

impl StationId {
    /// Create a station id, rejecting zero.
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(StationId(value))
    }

    /// Parse a station id from a (possibly padded) decimal string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStationId {
                input: s.to_string(),
                reason: "must not be empty",
            });
        }

        let value: u32 = trimmed.parse().map_err(|_| InvalidStationId {
            input: s.to_string(),
            reason: "must be a positive integer",
        })?;

        StationId::new(value).ok_or_else(|| InvalidStationId {
            input: s.to_string(),
            reason: "must be greater than zero",
        })
    }

    /// Returns the raw integer value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stop on one line.
///
/// Neighbours are stored as ids and resolved through the owning network,
/// so loop lines and mutual transfer links never form ownership cycles.
/// Two stations with the same name on different lines are distinct; equality
/// is by id alone.
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    line_name: String,
    station_name: String,
    prev: Option<StationId>,
    next: Option<StationId>,
    transfers: Vec<StationId>,
}

impl Station {
    pub(crate) fn new(id: StationId, line_name: String, station_name: String) -> Self {
        Self {
            id,
            line_name,
            station_name,
            prev: None,
            next: None,
            transfers: Vec::new(),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn line_name(&self) -> &str {
        &self.line_name
    }

    pub fn station_name(&self) -> &str {
        &self.station_name
    }

    /// The preceding station on the same line.
    pub fn prev(&self) -> Option<StationId> {
        self.prev
    }

    /// The following station on the same line.
    pub fn next(&self) -> Option<StationId> {
        self.next
    }

    /// Stations on other lines (or the closing end of a loop) reachable on foot.
    pub fn transfer_stations(&self) -> &[StationId] {
        &self.transfers
    }

    pub(crate) fn set_prev(&mut self, prev: StationId) {
        self.prev = Some(prev);
    }

    pub(crate) fn set_next(&mut self, next: StationId) {
        self.next = Some(next);
    }

    /// Record a transfer link. Returns false if the link was already present.
    pub(crate) fn add_transfer(&mut self, other: StationId) -> bool {
        if self.transfers.contains(&other) {
            return false;
        }
        self.transfers.push(other);
        true
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl std::hash::Hash for Station {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}，{}", self.line_name, self.station_name)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any positive u32 survives formatting and parsing
        #[test]
        fn display_then_parse(n in 1u32..) {
            let id = StationId::new(n).unwrap();
            prop_assert_eq!(StationId::parse(&id.to_string()).unwrap(), id);
        }

        /// Non-digit input is always rejected
        #[test]
        fn letters_rejected(s in "[a-zA-Z]{1,6}") {
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
