use std::time::{Duration, Instant};

use log::info;
use ordered_float::OrderedFloat;
use safest_path::algorithm::{dijkstra::Dijkstra, SafestPathAlgorithm};
use safest_path::graph::generators::generate_random_risk_graph;
use safest_path::graph::{DirectedGraph, Graph};

// Times one safest-path run and reports reachability stats
fn benchmark_run<A>(
    algorithm: &A,
    graph: &DirectedGraph<OrderedFloat<f64>>,
    source: usize,
) -> Duration
where
    A: SafestPathAlgorithm<OrderedFloat<f64>, DirectedGraph<OrderedFloat<f64>>>,
{
    info!(
        "running {} on graph with {} vertices and {} edges",
        algorithm.name(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let start = Instant::now();
    let table = algorithm.compute_distances(graph, source).unwrap();
    let duration = start.elapsed();

    let reachable = (0..table.vertex_count())
        .filter(|&v| table.is_reachable(v))
        .count();
    info!("  - found {} reachable vertices in {:?}", reachable, duration);

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![
        // Small graphs
        1_000,
        10_000,
        // Medium graphs
        50_000,
        // Large graphs
        100_000,
        200_000,
    ];
    let edge_factor = 4.0;

    let dijkstra = Dijkstra::new();

    for size in graph_sizes {
        info!(
            "generating random risk graph with {} vertices (edge factor {})",
            size, edge_factor
        );
        let graph = generate_random_risk_graph(size, edge_factor);
        benchmark_run(&dijkstra, &graph, 0);
    }
}
