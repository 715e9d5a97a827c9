use criterion::{black_box, criterion_group, criterion_main, Criterion};
use safest_path::algorithm::{dijkstra::Dijkstra, SafestPathAlgorithm};
use safest_path::graph::generators::{generate_grid_graph, generate_random_risk_graph_seeded};

fn bench_random_graph(c: &mut Criterion) {
    let graph = generate_random_risk_graph_seeded(10_000, 4.0, 7);
    let dijkstra = Dijkstra::new();

    c.bench_function("dijkstra_random_10k", |b| {
        b.iter(|| dijkstra.compute_distances(black_box(&graph), 0).unwrap())
    });
}

fn bench_grid_graph(c: &mut Criterion) {
    let graph = generate_grid_graph(100, 100);
    let dijkstra = Dijkstra::new();

    c.bench_function("dijkstra_grid_100x100", |b| {
        b.iter(|| dijkstra.compute_distances(black_box(&graph), 0).unwrap())
    });
}

criterion_group!(benches, bench_random_graph, bench_grid_graph);
criterion_main!(benches);
