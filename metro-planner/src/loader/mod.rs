//! Building a network from station records.
//!
//! Loading runs in two passes. The first creates every station, appending it
//! to its line in record order, and collects the raw transfer adjacency. The
//! second resolves that adjacency into links once every station exists, so a
//! record may name a transfer station that appears later in the table.
//!
//! Bad rows are skipped with a warning. Only a source that is broken as a
//! whole fails the load, and then no network is returned at all.

mod csv_source;
mod error;
mod record;
mod same_name;

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{LineFamilies, Network, StationId};

pub use csv_source::{REQUIRED_COLUMNS, read_records};
pub use error::{DataLoadError, RecordError};
pub use record::{StationRecord, parse_transfer_ids};
pub use same_name::link_same_name;

/// Builds [`Network`]s from station records.
#[derive(Debug, Clone, Default)]
pub struct DataLoader {
    families: LineFamilies,
}

impl DataLoader {
    /// Create a loader using the heuristic line family rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader whose networks use the given family rule.
    pub fn with_families(families: LineFamilies) -> Self {
        Self { families }
    }

    /// Build a network from in-memory records.
    pub fn load<I>(&self, records: I) -> Result<Network, DataLoadError>
    where
        I: IntoIterator<Item = StationRecord>,
    {
        let mut network = Network::with_families(self.families.clone());
        let mut adjacency: HashMap<StationId, Vec<StationId>> = HashMap::new();

        let mut total = 0usize;
        let mut skipped = 0usize;
        let mut missing_line = 0usize;
        let mut missing_name = 0usize;

        for record in records {
            total += 1;
            if record.line_name.trim().is_empty() {
                missing_line += 1;
            }
            if record.station_name.trim().is_empty() {
                missing_name += 1;
            }

            match add_record(&mut network, &record) {
                Ok(Some((id, transfers))) => {
                    adjacency.insert(id, transfers);
                }
                Ok(None) => {}
                Err(e) => {
                    skipped += 1;
                    warn!(
                        station_id = %record.station_id,
                        line = %record.line_name,
                        station = %record.station_name,
                        error = %e,
                        "skipping station record"
                    );
                }
            }
        }

        if total > 0 && missing_name == total {
            return Err(DataLoadError::MissingField("站名"));
        }
        if total > 0 && missing_line == total {
            return Err(DataLoadError::MissingField("线路名"));
        }
        if network.is_empty() {
            return Err(DataLoadError::NoStations);
        }

        let links = network.build_transfer_links(&adjacency);

        debug!(
            stations = network.station_count(),
            lines = network.line_count(),
            links,
            skipped,
            "network loaded"
        );

        Ok(network)
    }

    /// Build a network from a CSV file.
    pub fn load_csv_path(&self, path: impl AsRef<Path>) -> Result<Network, DataLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_csv_reader(file)
    }

    /// Build a network from CSV text read from `source`.
    pub fn load_csv_reader<R: std::io::Read>(&self, source: R) -> Result<Network, DataLoadError> {
        let records = read_records(source)?;
        self.load(records)
    }
}

/// Build a network from in-memory records with the default loader.
pub fn load<I>(records: I) -> Result<Network, DataLoadError>
where
    I: IntoIterator<Item = StationRecord>,
{
    DataLoader::new().load(records)
}

/// First pass for one record: add the station and return its transfer list
/// (if it has one).
fn add_record(
    network: &mut Network,
    record: &StationRecord,
) -> Result<Option<(StationId, Vec<StationId>)>, RecordError> {
    let id = StationId::parse(&record.station_id)?;
    network.add_station(id, &record.line_name, &record.station_name)?;

    let transfers = parse_transfer_ids(&record.transfer_ids);
    Ok((!transfers.is_empty()).then_some((id, transfers)))
}
