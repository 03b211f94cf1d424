//! Metro route planner.
//!
//! Answers "how do I get from station A to station B" in a multi-line metro
//! network, optimizing for either the fewest stations or the fewest changes
//! of line.
//!
//! ```
//! use metro_planner::loader::{StationRecord, load};
//! use metro_planner::planner::{PathFinder, PathStep, Strategy};
//!
//! let network = load(vec![
//!     StationRecord::new(1, "1号线", "A", ""),
//!     StationRecord::new(2, "1号线", "B", "5"),
//!     StationRecord::new(3, "1号线", "C", ""),
//!     StationRecord::new(4, "2号线", "D", ""),
//!     StationRecord::new(5, "2号线", "B", "2"),
//!     StationRecord::new(6, "2号线", "E", ""),
//! ])
//! .unwrap();
//!
//! let start = network.find_station("1号线", "A").unwrap().id();
//! let end = network.get_station_any_line("E").unwrap().id();
//!
//! let path = PathFinder::new(&network)
//!     .find_path(start, end, Strategy::MinStation)
//!     .unwrap();
//! assert_eq!(path.station_count(), 4);
//! assert_eq!(path.steps()[2], PathStep::Transfer);
//! ```

pub mod domain;
pub mod loader;
pub mod planner;
pub mod reload;
