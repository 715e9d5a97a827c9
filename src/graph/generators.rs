use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed risk graph with roughly `edge_factor * vertices` edges
///
/// Edge weights are negative log probabilities: each edge draws a traversal
/// probability from (0.05, 1.0) and carries `-ln(p)`, so all weights are
/// positive and unreachable pockets of the graph are common at low edge
/// factors.
pub fn generate_random_risk_graph(
    vertices: usize,
    edge_factor: f64,
) -> DirectedGraph<OrderedFloat<f64>> {
    generate_random_risk_graph_seeded(vertices, edge_factor, rand::thread_rng().gen())
}

/// Seeded variant of [`generate_random_risk_graph`] for reproducible runs
pub fn generate_random_risk_graph_seeded(
    vertices: usize,
    edge_factor: f64,
    seed: u64,
) -> DirectedGraph<OrderedFloat<f64>> {
    assert!(vertices > 0, "vertices must be positive");

    let mut graph = DirectedGraph::with_vertices(vertices);
    let mut rng = StdRng::seed_from_u64(seed);

    // Approximately edge_factor * n edges
    let num_edges = (edge_factor * vertices as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        if u != v {
            let p: f64 = rng.gen_range(0.05..1.0);
            graph.add_edge(u, v, OrderedFloat(-p.ln()));
        }
    }

    graph
}

/// Generates a directed grid graph with 8-directional movement
///
/// Cardinal moves carry unit risk, diagonal moves 1.4. Deterministic shape,
/// used by the benchmarks.
pub fn generate_grid_graph(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;

            let directions = [
                // Cardinal directions (N, E, S, W)
                (0, -1, 1.0),
                (1, 0, 1.0),
                (0, 1, 1.0),
                (-1, 0, 1.0),
                // Diagonal directions (NE, SE, SW, NW)
                (1, -1, 1.4),
                (1, 1, 1.4),
                (-1, 1, 1.4),
                (-1, -1, 1.4),
            ];

            for (dx, dy, risk) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(risk));
                }
            }
        }
    }

    graph
}
