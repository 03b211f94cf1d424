//! Shared, reloadable network.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::domain::Network;
use crate::loader::{DataLoadError, DataLoader, StationRecord};

/// Thread-safe handle to the current network.
///
/// Readers take an `Arc` snapshot and query it without holding the lock, so a
/// reload never disturbs queries already in flight. A reload builds the
/// replacement completely before swapping it in.
#[derive(Debug, Clone)]
pub struct NetworkHandle {
    inner: Arc<RwLock<Arc<Network>>>,
    loader: DataLoader,
}

impl NetworkHandle {
    /// Wrap an already loaded network.
    pub fn new(network: Network, loader: DataLoader) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(network))),
            loader,
        }
    }

    /// Load a network from records, failing if the records are unusable.
    pub fn load<I>(loader: DataLoader, records: I) -> Result<Self, DataLoadError>
    where
        I: IntoIterator<Item = StationRecord>,
    {
        let network = loader.load(records)?;
        Ok(Self::new(network, loader))
    }

    /// A handle holding an empty network, for callers that keep running after
    /// a failed initial load.
    pub fn empty(loader: DataLoader) -> Self {
        Self::new(Network::new(), loader)
    }

    /// The current network.
    pub fn snapshot(&self) -> Arc<Network> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Rebuild the network from records.
    ///
    /// On success, replaces the current network and returns its station
    /// count. On failure, the existing network is kept and the error is
    /// returned.
    pub fn reload<I>(&self, records: I) -> Result<usize, DataLoadError>
    where
        I: IntoIterator<Item = StationRecord>,
    {
        let network = self.loader.load(records).inspect_err(|e| {
            warn!(error = %e, "reload failed, keeping current network");
        })?;
        Ok(self.replace(network))
    }

    /// Rebuild the network from a CSV file, with the same guarantees as
    /// [`NetworkHandle::reload`].
    pub fn reload_csv(&self, path: impl AsRef<std::path::Path>) -> Result<usize, DataLoadError> {
        let network = self.loader.load_csv_path(path).inspect_err(|e| {
            warn!(error = %e, "reload failed, keeping current network");
        })?;
        Ok(self.replace(network))
    }

    fn replace(&self, network: Network) -> usize {
        let count = network.station_count();
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(network);
        debug!(stations = count, "network replaced");
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;
    use crate::planner::{PathFinder, Strategy};

    fn records() -> Vec<StationRecord> {
        vec![
            StationRecord::new(1, "1号线", "A", ""),
            StationRecord::new(2, "1号线", "B", ""),
        ]
    }

    #[test]
    fn reload_replaces_network() {
        let handle = NetworkHandle::load(DataLoader::new(), records()).unwrap();
        assert_eq!(handle.snapshot().station_count(), 2);

        let mut more = records();
        more.push(StationRecord::new(3, "1号线", "C", ""));
        assert_eq!(handle.reload(more).unwrap(), 3);
        assert_eq!(handle.snapshot().station_count(), 3);
    }

    #[test]
    fn failed_reload_keeps_previous_network() {
        let handle = NetworkHandle::load(DataLoader::new(), records()).unwrap();
        let before = handle.snapshot();

        let broken = vec![
            StationRecord::new(1, "1号线", "", ""),
            StationRecord::new(2, "1号线", "", ""),
        ];
        assert!(matches!(
            handle.reload(broken),
            Err(DataLoadError::MissingField(_))
        ));

        let after = handle.snapshot();
        assert!(Arc::ptr_eq(&before, &after));
        assert!(after.find_station("1号线", "B").is_some());
    }

    #[test]
    fn failed_csv_reload_keeps_previous_network() {
        let handle = NetworkHandle::load(DataLoader::new(), records()).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let err = handle.reload_csv(dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }));
        assert_eq!(handle.snapshot().station_count(), 2);
    }

    #[test]
    fn snapshot_outlives_reload() {
        let handle = NetworkHandle::load(DataLoader::new(), records()).unwrap();
        let old = handle.snapshot();

        handle
            .reload(vec![StationRecord::new(9, "2号线", "X", "")])
            .unwrap();

        // Queries against the old snapshot still see the old graph.
        let a = StationId::new(1).unwrap();
        let b = StationId::new(2).unwrap();
        let path = PathFinder::new(&old)
            .find_path(a, b, Strategy::MinStation)
            .unwrap();
        assert_eq!(path.station_count(), 2);
        assert!(handle.snapshot().station(a).is_none());
    }

    #[test]
    fn empty_fallback() {
        let handle = NetworkHandle::empty(DataLoader::new());
        assert!(handle.snapshot().is_empty());

        let clone = handle.clone();
        clone.reload(records()).unwrap();
        assert_eq!(handle.snapshot().station_count(), 2);
    }
}
