//! Safest Path - minimum cumulative risk routing over directed graphs
//!
//! This library computes single-source safest paths: given a directed graph
//! whose edge weights are non-negative risk costs (typically the negative
//! log of a traversal probability), it produces the minimum cumulative
//! weight from a source vertex to every reachable vertex.
//!
//! The engine is a Dijkstra-style greedy relaxation over a min-priority
//! frontier with lazy deletion of stale entries. Correctness rests on the
//! non-negative weight precondition; negative or NaN weights encountered
//! during relaxation are rejected with [`Error::InvalidWeight`].

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, DistanceTable, SafestPathAlgorithm};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid source vertex: {0}")]
    InvalidSource(usize),

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
