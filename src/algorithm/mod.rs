pub mod dijkstra;
pub mod traits;

pub use traits::{DistanceTable, SafestPathAlgorithm};
