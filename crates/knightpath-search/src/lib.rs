//! Shortest-path search for a single piece on an otherwise empty board.

pub mod config;
pub mod distance;
pub mod error;
pub mod path;
pub mod search;

pub use config::SearchConfig;
pub use distance::DistanceMap;
pub use error::SearchError;
pub use path::KnightPath;
pub use search::{SearchEngine, shortest_path};
