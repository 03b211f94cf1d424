//! Rail lines.

use super::StationId;

/// A line: an ordered sequence of stations.
///
/// The line owns the ordering; the stations themselves carry the matching
/// `prev`/`next` links, which the network keeps consistent as stations are
/// appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: String,
    stations: Vec<StationId>,
}

impl Line {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            stations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Station ids in line order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn first(&self) -> Option<StationId> {
        self.stations.first().copied()
    }

    pub fn last(&self) -> Option<StationId> {
        self.stations.last().copied()
    }

    pub fn contains(&self, id: StationId) -> bool {
        self.stations.contains(&id)
    }

    /// Append a station, returning the previous tail (if any) so the caller
    /// can link the two.
    pub(crate) fn push(&mut self, id: StationId) -> Option<StationId> {
        let tail = self.last();
        self.stations.push(id);
        tail
    }
}
