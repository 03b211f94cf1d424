//! Search configuration for the path finder.

use super::Strategy;

/// Edge weights used by the path search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Weight of one hop between neighbouring stations on the same line.
    pub hop_weight: f64,

    /// Weight of a same-name change that is not a real transfer: closing a
    /// loop line, or moving between a main line and its branch.
    pub free_transfer_weight: f64,

    /// Weight of a real transfer when minimizing stations.
    pub min_station_transfer_weight: f64,

    /// Weight of a real transfer when minimizing transfers.
    /// Large enough that any number of extra hops is preferred to one
    /// more change.
    pub min_transfer_transfer_weight: f64,
}

impl SearchConfig {
    /// Create a new configuration with the given weights.
    pub fn new(
        hop_weight: f64,
        free_transfer_weight: f64,
        min_station_transfer_weight: f64,
        min_transfer_transfer_weight: f64,
    ) -> Self {
        Self {
            hop_weight,
            free_transfer_weight,
            min_station_transfer_weight,
            min_transfer_transfer_weight,
        }
    }

    /// Weight of a real transfer under the given strategy.
    pub fn transfer_weight(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::MinStation => self.min_station_transfer_weight,
            Strategy::MinTransfer => self.min_transfer_transfer_weight,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            hop_weight: 1.0,
            free_transfer_weight: 0.1,
            min_station_transfer_weight: 1.0,
            min_transfer_transfer_weight: 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.hop_weight, 1.0);
        assert_eq!(config.free_transfer_weight, 0.1);
        assert_eq!(config.min_station_transfer_weight, 1.0);
        assert_eq!(config.min_transfer_transfer_weight, 1000.0);
    }

    #[test]
    fn transfer_weight_by_strategy() {
        let config = SearchConfig::default();

        assert_eq!(config.transfer_weight(Strategy::MinStation), 1.0);
        assert_eq!(config.transfer_weight(Strategy::MinTransfer), 1000.0);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(2.0, 0.5, 3.0, 500.0);

        assert_eq!(config.hop_weight, 2.0);
        assert_eq!(config.free_transfer_weight, 0.5);
        assert_eq!(config.transfer_weight(Strategy::MinStation), 3.0);
        assert_eq!(config.transfer_weight(Strategy::MinTransfer), 500.0);
    }
}
