use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{Float, ToPrimitive, Zero};

use crate::algorithm::{DistanceTable, SafestPathAlgorithm};
use crate::data_structures::Frontier;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion of stale frontier entries
///
/// Greedy finalization is only sound for non-negative weights; the
/// relaxation loop fails fast with [`Error::InvalidWeight`] when it observes
/// a negative or NaN weight.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> SafestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_distances(&self, graph: &G, source: usize) -> Result<DistanceTable<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidSource(source));
        }

        let n = graph.vertex_count();
        debug!(
            "computing distances from vertex {} over {} vertices and {} edges",
            source,
            n,
            graph.edge_count()
        );

        // Every vertex starts at the infinite sentinel; unreachable ones keep it
        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];

        distances[source] = W::zero();

        let mut frontier = Frontier::new();
        frontier.push(source, W::zero());

        while let Some((u, dist_u)) = frontier.pop() {
            // A better entry for u was already processed; this one is stale
            if visited[u] {
                continue;
            }
            visited[u] = true;
            trace!("finalized vertex {} at distance {:?}", u, dist_u);

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                if weight.is_nan() || weight < W::zero() {
                    return Err(Error::InvalidWeight(weight.to_f64().unwrap_or(f64::NAN)));
                }

                let candidate = dist_u + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    frontier.push(v, candidate);
                }
            }
        }

        Ok(DistanceTable {
            distances,
            predecessors,
            source,
        })
    }
}
