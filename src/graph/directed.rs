use crate::graph::traits::{Graph, MutableGraph};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
///
/// Vertex IDs are indices into the adjacency vector, so the vertex set is
/// always the dense range `[0, vertex_count())`.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: outgoing[v] = [(target_vertex, weight)]
    outgoing: Vec<Vec<(usize, W)>>,

    /// Total number of edges in the graph
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            outgoing: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing
            .iter()
            .flatten()
            .all(|&(_, weight)| weight >= W::zero())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.outgoing.len()
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        self.outgoing.push(Vec::new());
        self.outgoing.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }

        self.outgoing[from].push((to, weight));
        self.edge_count += 1;
        true
    }
}
