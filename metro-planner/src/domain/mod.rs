//! Domain types for the metro route planner.
//!
//! Stations, lines and the network graph that owns them. Stations are held
//! in one arena per network and refer to each other by [`StationId`], so the
//! graph can contain loops and mutual transfer links without shared
//! ownership.

mod error;
mod family;
mod line;
mod network;
mod station;

pub use error::DomainError;
pub use family::LineFamilies;
pub use line::Line;
pub use network::Network;
pub use station::{InvalidStationId, Station, StationId};
