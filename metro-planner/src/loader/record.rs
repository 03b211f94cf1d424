//! Input records.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::StationId;

/// One row of the station table.
///
/// Fields are kept as raw text so that malformed rows can be reported and
/// skipped rather than failing deserialization of the whole source. The serde
/// names match the CSV header of the published station table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRecord {
    /// Positive integer id, unique across the table.
    #[serde(rename = "站点ID")]
    pub station_id: String,

    #[serde(rename = "线路名")]
    pub line_name: String,

    #[serde(rename = "站名")]
    pub station_name: String,

    /// Ids of stations reachable by walking transfer, separated by `/`.
    #[serde(rename = "可换乘站点ID", default)]
    pub transfer_ids: String,
}

impl StationRecord {
    /// Create a record.
    pub fn new(
        station_id: impl ToString,
        line_name: impl Into<String>,
        station_name: impl Into<String>,
        transfer_ids: impl Into<String>,
    ) -> Self {
        Self {
            station_id: station_id.to_string(),
            line_name: line_name.into(),
            station_name: station_name.into(),
            transfer_ids: transfer_ids.into(),
        }
    }
}

/// Parse a `/`-separated transfer list.
///
/// Whitespace around tokens is ignored, as are empty tokens. Tokens that are
/// not valid ids are dropped with a warning.
pub fn parse_transfer_ids(raw: &str) -> Vec<StationId> {
    raw.split('/')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match StationId::parse(token) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(token, error = %e, "dropping unparseable transfer id");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &str) -> Vec<u32> {
        parse_transfer_ids(raw).into_iter().map(StationId::get).collect()
    }

    #[test]
    fn empty_list() {
        assert!(ids("").is_empty());
        assert!(ids("  ").is_empty());
        assert!(ids("/").is_empty());
    }

    #[test]
    fn single_and_multiple() {
        assert_eq!(ids("12"), vec![12]);
        assert_eq!(ids("12/34/56"), vec![12, 34, 56]);
        assert_eq!(ids(" 12 / 34 "), vec![12, 34]);
    }

    #[test]
    fn bad_tokens_are_dropped() {
        assert_eq!(ids("12/abc/0/34"), vec![12, 34]);
        assert_eq!(ids("12//34/"), vec![12, 34]);
    }

    #[test]
    fn new_accepts_numbers() {
        let record = StationRecord::new(7, "1号线", "莘庄", "");
        assert_eq!(record.station_id, "7");
        assert_eq!(record.line_name, "1号线");
        assert_eq!(record.station_name, "莘庄");
        assert!(record.transfer_ids.is_empty());
    }
}
