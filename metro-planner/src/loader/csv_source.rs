//! Reading station records from CSV.

use std::io;

use tracing::warn;

use super::error::DataLoadError;
use super::record::StationRecord;

/// Header names every station table must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["站点ID", "线路名", "站名", "可换乘站点ID"];

/// Read station records from UTF-8 CSV with a header row.
///
/// Extra columns are ignored and cells are trimmed. A missing required
/// column fails the whole read; a row that cannot be decoded is skipped with
/// a warning.
pub fn read_records<R: io::Read>(source: R) -> Result<Vec<StationRecord>, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(DataLoadError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<StationRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                // +2: one for the header, one for 1-based numbering
                warn!(row = row + 2, error = %e, "skipping unreadable CSV row");
            }
        }
    }

    Ok(records)
}
