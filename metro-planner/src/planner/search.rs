//! Weighted shortest-path search.
//!
//! Dijkstra over the station graph. Same-line neighbours cost one hop;
//! transfer links cost depends on whether the change is real and on the
//! chosen [`Strategy`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::{Network, Station, StationId};

use super::config::SearchConfig;
use super::path::Path;
use super::strategy::{InvalidStrategy, Strategy};

/// Error from path search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The request itself is wrong: an unknown station or strategy
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The two stations are not connected
    #[error("no path from {from} to {to}")]
    PathNotFound { from: String, to: String },
}

impl From<InvalidStrategy> for SearchError {
    fn from(err: InvalidStrategy) -> Self {
        SearchError::InvalidArgument(err.to_string())
    }
}

/// Priority queue entry. Ordered so that `BinaryHeap` pops the lowest cost
/// first and, among equal costs, the entry pushed earliest.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    cost: f64,
    seq: u64,
    slot: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Finds routes through a [`Network`].
///
/// Holds only a shared borrow of the network, so any number of finders can
/// query the same network at once.
#[derive(Debug, Clone)]
pub struct PathFinder<'a> {
    network: &'a Network,
    config: SearchConfig,
}

impl<'a> PathFinder<'a> {
    /// Create a path finder with the default weights.
    pub fn new(network: &'a Network) -> Self {
        Self::with_config(network, SearchConfig::default())
    }

    /// Create a path finder with custom weights.
    pub fn with_config(network: &'a Network, config: SearchConfig) -> Self {
        Self { network, config }
    }

    pub fn network(&self) -> &'a Network {
        self.network
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the best path from `start` to `end` under `strategy`.
    ///
    /// Returns the single-station path when `start == end`. Among routes of
    /// equal cost the one discovered first wins, so results are stable for a
    /// given network.
    pub fn find_path(
        &self,
        start: StationId,
        end: StationId,
        strategy: Strategy,
    ) -> Result<Path, SearchError> {
        let start_slot = self.slot(start, "start")?;
        let end_slot = self.slot(end, "end")?;

        if start_slot == end_slot {
            return Ok(Path::from_stations(self.network, &[start]));
        }

        let count = self.network.station_count();
        let mut dist = vec![f64::INFINITY; count];
        let mut came_from: Vec<Option<usize>> = vec![None; count];
        let mut visited = vec![false; count];
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;

        dist[start_slot] = 0.0;
        heap.push(QueueEntry {
            cost: 0.0,
            seq,
            slot: start_slot,
        });

        let mut found = false;
        while let Some(QueueEntry { cost, slot, .. }) = heap.pop() {
            if visited[slot] {
                continue;
            }
            visited[slot] = true;
            if slot == end_slot {
                found = true;
                break;
            }

            let current = self.network.at_slot(slot);
            for (next_slot, weight) in self.neighbours(current, strategy) {
                if visited[next_slot] {
                    continue;
                }
                let next_cost = cost + weight;
                if next_cost < dist[next_slot] {
                    dist[next_slot] = next_cost;
                    came_from[next_slot] = Some(slot);
                    seq += 1;
                    heap.push(QueueEntry {
                        cost: next_cost,
                        seq,
                        slot: next_slot,
                    });
                }
            }
        }

        if !found {
            debug!(%start, %end, %strategy, "no path found");
            return Err(SearchError::PathNotFound {
                from: self.network.at_slot(start_slot).to_string(),
                to: self.network.at_slot(end_slot).to_string(),
            });
        }

        let mut stations = Vec::new();
        let mut cursor = Some(end_slot);
        while let Some(slot) = cursor {
            stations.push(self.network.at_slot(slot).id());
            cursor = came_from[slot];
        }
        stations.reverse();

        let path = Path::from_stations(self.network, &stations);
        debug!(
            %start,
            %end,
            %strategy,
            cost = dist[end_slot],
            stations = path.station_count(),
            transfers = path.transfer_count(),
            pushed = seq + 1,
            "path found"
        );
        Ok(path)
    }

    /// Parse `strategy` and run [`PathFinder::find_path`].
    pub fn find_path_by_name(
        &self,
        start: StationId,
        end: StationId,
        strategy: &str,
    ) -> Result<Path, SearchError> {
        let strategy: Strategy = strategy.parse()?;
        self.find_path(start, end, strategy)
    }

    /// Run [`PathFinder::find_path`] on the result of two station lookups.
    ///
    /// A missing endpoint is an invalid argument.
    pub fn find_path_between(
        &self,
        start: Option<&Station>,
        end: Option<&Station>,
        strategy: Strategy,
    ) -> Result<Path, SearchError> {
        let (Some(start), Some(end)) = (start, end) else {
            return Err(SearchError::InvalidArgument(
                "start and end stations are required".to_string(),
            ));
        };
        self.find_path(start.id(), end.id(), strategy)
    }

    /// Sum of edge weights along `path` under `strategy`, or `None` if two
    /// consecutive stations are not neighbours. Where two stations are joined
    /// by more than one edge the cheapest counts.
    pub fn path_cost(&self, path: &Path, strategy: Strategy) -> Option<f64> {
        let stations: Vec<StationId> = path.stations().collect();
        let mut total = 0.0;
        for pair in stations.windows(2) {
            let from = self.network.station(pair[0])?;
            let to = self.network.slot(pair[1])?;
            let weight = self
                .neighbours(from, strategy)
                .filter(|&(slot, _)| slot == to)
                .map(|(_, weight)| weight)
                .min_by(f64::total_cmp)?;
            total += weight;
        }
        Some(total)
    }

    fn slot(&self, id: StationId, role: &str) -> Result<usize, SearchError> {
        self.network.slot(id).ok_or_else(|| {
            SearchError::InvalidArgument(format!("{role} station {id} does not exist"))
        })
    }

    /// Neighbours of `station` with edge weights: line neighbours first
    /// (`prev`, then `next`), then transfer links in load order.
    fn neighbours<'s>(
        &'s self,
        station: &'s Station,
        strategy: Strategy,
    ) -> impl Iterator<Item = (usize, f64)> + 's {
        let line = [station.prev(), station.next()]
            .into_iter()
            .flatten()
            .filter_map(move |id| self.network.slot(id))
            .map(move |slot| (slot, self.config.hop_weight));

        let transfers = station.transfer_stations().iter().filter_map(move |&id| {
            let slot = self.network.slot(id)?;
            let weight = self.transfer_weight(station, self.network.at_slot(slot), strategy);
            trace!(from = %station, to = %id, weight, "transfer edge");
            Some((slot, weight))
        });

        line.chain(transfers)
    }

    /// Weight of a transfer link. Same-name changes within a line (loop
    /// closure) or a line family are free; anything else is a real transfer.
    fn transfer_weight(&self, from: &Station, to: &Station, strategy: Strategy) -> f64 {
        if from.station_name() == to.station_name()
            && (from.line_name() == to.line_name()
                || self
                    .network
                    .families()
                    .same_family(from.line_name(), to.line_name()))
        {
            return self.config.free_transfer_weight;
        }
        self.config.transfer_weight(strategy)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
