use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::Result;

/// Minimum cumulative weights from a single source vertex
///
/// Distances are ordered by vertex index. Unreachable vertices hold the
/// explicit sentinel `W::infinity()` rather than an absent value.
#[derive(Debug, Clone)]
pub struct DistanceTable<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance from the source to each vertex; `W::infinity()` if unreachable
    pub distances: Vec<W>,

    /// Predecessor vertices in the safest-path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> DistanceTable<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices the table covers
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if the vertex has a finite distance from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distances
            .get(vertex)
            .map_or(false, |d| !d.is_infinite())
    }

    /// Returns the safest path from the source to `target` as a vertex
    /// sequence, or `None` if the target is unreachable or out of range
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        // Walk the predecessor tree back to the source. The tree is acyclic,
        // so this terminates after at most vertex_count() steps.
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
        }
        path.reverse();

        Some(path)
    }
}

/// Trait for safest-path algorithms
pub trait SafestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute minimum cumulative weights from a source vertex to all
    /// reachable vertices
    fn compute_distances(&self, graph: &G, source: usize) -> Result<DistanceTable<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
