//! Route planning over a metro network.
//!
//! This module answers "how do I get from station A to station B", either
//! through the fewest stations or with the fewest changes of line.
//!
//! Both objectives run the same Dijkstra search and differ only in the
//! weight given to a real transfer. Changes that riders do not experience
//! as transfers (closing a loop line, or a main line meeting its own branch
//! at a same-named station) are nearly free under either objective, but are
//! still marked in the returned path because the rider changes platform.

mod config;
mod path;
mod search;
mod strategy;

pub use config::SearchConfig;
pub use path::{Path, PathStep};
pub use search::{PathFinder, SearchError};
pub use strategy::{InvalidStrategy, Strategy};
