//! Search results.

use serde::Serialize;

use crate::domain::{Network, Station, StationId};

/// One entry of a path: a station, or a change of line between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStep {
    Station(StationId),
    Transfer,
}

impl PathStep {
    pub fn station(self) -> Option<StationId> {
        match self {
            PathStep::Station(id) => Some(id),
            PathStep::Transfer => None,
        }
    }

    pub fn is_transfer(self) -> bool {
        matches!(self, PathStep::Transfer)
    }
}

/// An ordered route from a start station to an end station.
///
/// A [`PathStep::Transfer`] sits between every pair of consecutive stations on
/// different lines, and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Build a path from a station sequence, marking every change of line.
    pub(crate) fn from_stations(network: &Network, stations: &[StationId]) -> Self {
        let mut steps = Vec::with_capacity(stations.len() * 2);
        let mut prev_line: Option<&str> = None;

        for &id in stations {
            let line = network.station(id).map(Station::line_name);
            if prev_line.is_some() && line != prev_line {
                steps.push(PathStep::Transfer);
            }
            steps.push(PathStep::Station(id));
            prev_line = line;
        }

        Self { steps }
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Station ids in travel order.
    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        self.steps.iter().filter_map(|step| step.station())
    }

    /// Number of station entries, counting both sides of each transfer.
    pub fn station_count(&self) -> usize {
        self.stations().count()
    }

    /// Number of line changes.
    pub fn transfer_count(&self) -> usize {
        self.steps.iter().filter(|step| step.is_transfer()).count()
    }

    pub fn first(&self) -> Option<StationId> {
        self.stations().next()
    }

    pub fn last(&self) -> Option<StationId> {
        self.stations().last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
