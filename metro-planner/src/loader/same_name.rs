//! Deriving the transfer column from station names.

use std::collections::HashMap;

use tracing::debug;

use super::record::StationRecord;

/// Fill the transfer column from shared station names.
///
/// Every record whose station name is shared with other records gets the ids
/// of all those others, in record order, replacing whatever its column held.
/// This links interchanges between lines, a loop line's repeated terminus and
/// branch junctions alike. Records with a unique or empty name are left
/// untouched.
///
/// Returns the number of records that were given links.
///
/// # Examples
///
/// ```
/// use metro_planner::loader::{StationRecord, link_same_name};
///
/// let mut records = vec![
///     StationRecord::new(1, "1号线", "徐家汇", ""),
///     StationRecord::new(2, "9号线", "徐家汇", ""),
///     StationRecord::new(3, "11号线", "徐家汇", ""),
/// ];
/// assert_eq!(link_same_name(&mut records), 3);
/// assert_eq!(records[0].transfer_ids, "2/3");
/// assert_eq!(records[1].transfer_ids, "1/3");
/// ```
pub fn link_same_name(records: &mut [StationRecord]) -> usize {
    let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        let name = record.station_name.trim();
        if !name.is_empty() {
            by_name.entry(name.to_string()).or_default().push(index);
        }
    }

    let mut linked = 0;
    for group in by_name.values().filter(|group| group.len() > 1) {
        for &index in group {
            let others: Vec<&str> = group
                .iter()
                .filter(|&&other| other != index)
                .map(|&other| records[other].station_id.trim())
                .collect();
            let joined = others.join("/");
            records[index].transfer_ids = joined;
            linked += 1;
        }
    }

    debug!(records = records.len(), linked, "derived same-name transfers");
    linked
}
