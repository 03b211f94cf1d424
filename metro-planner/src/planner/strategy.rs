//! Search objectives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?}: expected \"min_station\" or \"min_transfer\"")]
pub struct InvalidStrategy(String);

/// What the path search minimizes.
///
/// # Examples
///
/// ```
/// use metro_planner::planner::Strategy;
///
/// let strategy: Strategy = "min_transfer".parse().unwrap();
/// assert_eq!(strategy, Strategy::MinTransfer);
/// assert_eq!(strategy.as_str(), "min_transfer");
///
/// assert!("fastest".parse::<Strategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Fewest stations traversed.
    #[default]
    MinStation,

    /// Fewest line changes.
    MinTransfer,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::MinStation => "min_station",
            Strategy::MinTransfer => "min_transfer",
        }
    }
}

impl FromStr for Strategy {
    type Err = InvalidStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min_station" => Ok(Strategy::MinStation),
            "min_transfer" => Ok(Strategy::MinTransfer),
            other => Err(InvalidStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
