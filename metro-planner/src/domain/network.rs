//! The metro network graph.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use super::{DomainError, Line, LineFamilies, Station, StationId};

/// Every line, station and transfer link of one metro system.
///
/// Stations live in a single arena owned by the network; lines and links refer
/// to them by [`StationId`]. A network is assembled once (normally by
/// [`DataLoader`](crate::loader::DataLoader)) and is read-only afterwards, so a
/// shared reference can be queried from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    index: HashMap<StationId, usize>,
    lines: Vec<Line>,
    line_index: HashMap<String, usize>,
    by_name: HashMap<String, Vec<StationId>>,
    families: LineFamilies,
}

impl Network {
    /// Create an empty network using the heuristic family rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty network with the given family rule.
    pub fn with_families(families: LineFamilies) -> Self {
        Self {
            families,
            ..Self::default()
        }
    }

    pub fn families(&self) -> &LineFamilies {
        &self.families
    }

    /// Append a station to the end of its line, creating the line on first use.
    ///
    /// The new station is linked to the previous tail of the line.
    pub fn add_station(
        &mut self,
        id: StationId,
        line_name: &str,
        station_name: &str,
    ) -> Result<(), DomainError> {
        let line_name = line_name.trim();
        let station_name = station_name.trim();
        if line_name.is_empty() {
            return Err(DomainError::EmptyLineName);
        }
        if station_name.is_empty() {
            return Err(DomainError::EmptyStationName);
        }
        if self.index.contains_key(&id) {
            return Err(DomainError::DuplicateStation(id));
        }

        let line_idx = match self.line_index.get(line_name) {
            Some(&idx) => idx,
            None => {
                self.lines.push(Line::new(line_name.to_string()));
                self.line_index
                    .insert(line_name.to_string(), self.lines.len() - 1);
                self.lines.len() - 1
            }
        };

        let mut station = Station::new(id, line_name.to_string(), station_name.to_string());
        if let Some(tail) = self.lines[line_idx].push(id) {
            station.set_prev(tail);
            let tail_idx = self.index[&tail];
            self.stations[tail_idx].set_next(id);
        }

        self.index.insert(id, self.stations.len());
        self.stations.push(station);
        self.by_name
            .entry(station_name.to_string())
            .or_default()
            .push(id);

        Ok(())
    }

    /// Wire transfer links from an id adjacency map.
    ///
    /// Each entry lists the stations reachable on foot from the key station.
    /// Links are one-directional, exactly as listed. Ids that resolve to no
    /// station are skipped with a warning. Returns the number of links added.
    pub fn build_transfer_links(&mut self, adjacency: &HashMap<StationId, Vec<StationId>>) -> usize {
        let mut added = 0;

        for (&from, targets) in adjacency {
            let Some(&from_idx) = self.index.get(&from) else {
                warn!(station_id = %from, "transfer source is not a known station, skipping");
                continue;
            };

            for &to in targets {
                if to == from {
                    debug!(station_id = %from, "ignoring transfer link to itself");
                    continue;
                }
                if !self.index.contains_key(&to) {
                    warn!(
                        station_id = %from,
                        transfer_id = %to,
                        "transfer target is not a known station, skipping"
                    );
                    continue;
                }
                if self.stations[from_idx].add_transfer(to) {
                    added += 1;
                }
            }
        }

        debug!(links = added, "transfer links built");
        added
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.index.get(&id).map(|&idx| &self.stations[idx])
    }

    /// All stations in load order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn line(&self, line_name: &str) -> Option<&Line> {
        self.line_index.get(line_name).map(|&idx| &self.lines[idx])
    }

    /// All lines in the order they were first seen.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn line_names(&self) -> Vec<&str> {
        self.lines.iter().map(Line::name).collect()
    }

    /// Exact lookup of a station on one line.
    ///
    /// When a loop line repeats its first station at the tail, the head is
    /// returned.
    pub fn find_station(&self, line_name: &str, station_name: &str) -> Option<&Station> {
        self.stations_named(station_name)
            .find(|s| s.line_name() == line_name)
    }

    /// All stations carrying this exact name, in load order.
    pub fn stations_named<'a>(
        &'a self,
        station_name: &str,
    ) -> impl Iterator<Item = &'a Station> + use<'a> {
        self.by_name
            .get(station_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.station(*id))
    }

    /// Look up a station by name alone.
    ///
    /// Returns the first-loaded station with this name when every station of
    /// that name sits on a single line. Returns `None` when the name is
    /// unknown or is shared by several lines; callers should then ask for a
    /// line or fall back to [`Network::search_stations`].
    pub fn get_station_any_line(&self, station_name: &str) -> Option<&Station> {
        let mut matches = self.stations_named(station_name);
        let first = matches.next()?;
        if matches.any(|s| s.line_name() != first.line_name()) {
            debug!(station_name, "station name is shared by several lines");
            return None;
        }
        Some(first)
    }

    /// All stations whose name contains `keyword`, ordered by line name,
    /// then station name, then id.
    pub fn search_stations(&self, keyword: &str) -> Vec<&Station> {
        let mut found: Vec<&Station> = self
            .stations
            .iter()
            .filter(|s| s.station_name().contains(keyword))
            .collect();
        found.sort_by(|a, b| {
            a.line_name()
                .cmp(b.line_name())
                .then_with(|| a.station_name().cmp(b.station_name()))
                .then_with(|| a.id().cmp(&b.id()))
        });
        found
    }

    /// Follow `next` links from `start` to the end of its line.
    pub fn walk(&self, start: StationId) -> impl Iterator<Item = &Station> {
        std::iter::successors(self.station(start), |s| s.next().and_then(|n| self.station(n)))
    }

    /// Returns true if the line closes into a loop: its last station repeats
    /// the name of its first.
    pub fn is_loop(&self, line_name: &str) -> bool {
        let Some(line) = self.line(line_name) else {
            return false;
        };
        if line.station_count() < 2 {
            return false;
        }
        match (
            line.first().and_then(|id| self.station(id)),
            line.last().and_then(|id| self.station(id)),
        ) {
            (Some(head), Some(tail)) => head.station_name() == tail.station_name(),
            _ => false,
        }
    }

    /// Arena slot of a station, used by the search to index flat tables.
    pub(crate) fn slot(&self, id: StationId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub(crate) fn at_slot(&self, slot: usize) -> &Station {
        &self.stations[slot]
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Network(lines={}, stations={})",
            self.lines.len(),
            self.stations.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> StationId {
        StationId::new(n).unwrap()
    }

    /// 1号线: A–B–C, 2号线: D–B–E, with B linked both ways.
    fn sample() -> Network {
        let mut net = Network::new();
        net.add_station(id(1), "1号线", "A").unwrap();
        net.add_station(id(2), "1号线", "B").unwrap();
        net.add_station(id(3), "1号线", "C").unwrap();
        net.add_station(id(4), "2号线", "D").unwrap();
        net.add_station(id(5), "2号线", "B").unwrap();
        net.add_station(id(6), "2号线", "E").unwrap();

        let adjacency = HashMap::from([(id(2), vec![id(5)]), (id(5), vec![id(2)])]);
        assert_eq!(net.build_transfer_links(&adjacency), 2);
        net
    }

    #[test]
    fn stations_are_linked_in_line_order() {
        let net = sample();

        let a = net.station(id(1)).unwrap();
        let b = net.station(id(2)).unwrap();
        let c = net.station(id(3)).unwrap();

        assert_eq!(a.prev(), None);
        assert_eq!(a.next(), Some(id(2)));
        assert_eq!(b.prev(), Some(id(1)));
        assert_eq!(b.next(), Some(id(3)));
        assert_eq!(c.prev(), Some(id(2)));
        assert_eq!(c.next(), None);
    }

    #[test]
    fn counts_and_display() {
        let net = sample();
        assert_eq!(net.station_count(), 6);
        assert_eq!(net.line_count(), 2);
        assert!(!net.is_empty());
        assert_eq!(net.line_names(), vec!["1号线", "2号线"]);
        assert_eq!(net.to_string(), "Network(lines=2, stations=6)");
        assert!(Network::new().is_empty());
    }

    #[test]
    fn rejects_duplicate_and_empty() {
        let mut net = sample();
        assert_eq!(
            net.add_station(id(1), "3号线", "X"),
            Err(DomainError::DuplicateStation(id(1)))
        );
        assert_eq!(
            net.add_station(id(9), "  ", "X"),
            Err(DomainError::EmptyLineName)
        );
        assert_eq!(
            net.add_station(id(9), "3号线", ""),
            Err(DomainError::EmptyStationName)
        );
        assert_eq!(net.station_count(), 6);
        assert!(net.line("3号线").is_none());
    }

    #[test]
    fn transfer_links_skip_unknown_ids() {
        let mut net = sample();
        let adjacency = HashMap::from([
            (id(1), vec![id(99), id(4)]),
            (id(77), vec![id(1)]),
            (id(3), vec![id(3)]),
        ]);
        assert_eq!(net.build_transfer_links(&adjacency), 1);
        assert_eq!(net.station(id(1)).unwrap().transfer_stations(), &[id(4)]);
        assert!(net.station(id(3)).unwrap().transfer_stations().is_empty());
    }

    #[test]
    fn transfer_links_are_not_duplicated() {
        let mut net = sample();
        let adjacency = HashMap::from([(id(2), vec![id(5), id(5)])]);
        assert_eq!(net.build_transfer_links(&adjacency), 0);
        assert_eq!(net.station(id(2)).unwrap().transfer_stations(), &[id(5)]);
    }

    #[test]
    fn find_station_is_exact() {
        let net = sample();
        assert_eq!(net.find_station("2号线", "B").unwrap().id(), id(5));
        assert_eq!(net.find_station("1号线", "B").unwrap().id(), id(2));
        assert!(net.find_station("1号线", "E").is_none());
        assert!(net.find_station("3号线", "A").is_none());
    }

    #[test]
    fn any_line_lookup_requires_unambiguous_name() {
        let net = sample();
        assert_eq!(net.get_station_any_line("E").unwrap().id(), id(6));
        assert!(net.get_station_any_line("B").is_none());
        assert!(net.get_station_any_line("Z").is_none());
    }

    #[test]
    fn any_line_lookup_accepts_loop_duplicates() {
        let mut net = Network::new();
        net.add_station(id(1), "4号线", "宜山路").unwrap();
        net.add_station(id(2), "4号线", "上海体育馆").unwrap();
        net.add_station(id(3), "4号线", "宜山路").unwrap();
        assert_eq!(net.get_station_any_line("宜山路").unwrap().id(), id(1));
        assert_eq!(net.find_station("4号线", "宜山路").unwrap().id(), id(1));
    }

    #[test]
    fn search_is_ordered_by_line_then_name() {
        let net = sample();
        let found: Vec<StationId> = net.search_stations("B").iter().map(|s| s.id()).collect();
        assert_eq!(found, vec![id(2), id(5)]);

        let mut net = Network::new();
        net.add_station(id(1), "9号线", "徐家汇").unwrap();
        net.add_station(id(2), "1号线", "徐家汇").unwrap();
        net.add_station(id(3), "1号线", "上海南站").unwrap();
        net.add_station(id(4), "11号线", "徐家汇").unwrap();
        let found: Vec<StationId> = net.search_stations("徐家").iter().map(|s| s.id()).collect();
        // Byte order: "11号线" < "1号线" < "9号线".
        assert_eq!(found, vec![id(4), id(2), id(1)]);
        assert!(net.search_stations("人民广场").is_empty());
    }

    #[test]
    fn empty_keyword_matches_every_station() {
        let net = sample();
        assert_eq!(net.search_stations("").len(), net.station_count());
    }

    #[test]
    fn walking_next_visits_each_station_once() {
        let net = sample();
        for line in net.lines() {
            let walked: Vec<StationId> = net
                .walk(line.first().unwrap())
                .map(Station::id)
                .collect();
            assert_eq!(walked, line.stations());
        }
    }

    #[test]
    fn loop_detection() {
        let mut net = sample();
        assert!(!net.is_loop("1号线"));
        net.add_station(id(10), "4号线", "宜山路").unwrap();
        net.add_station(id(11), "4号线", "虹桥路").unwrap();
        net.add_station(id(12), "4号线", "宜山路").unwrap();
        assert!(net.is_loop("4号线"));
        assert!(!net.is_loop("5号线"));
    }
}
