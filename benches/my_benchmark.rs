use env_logger::Env;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use graph_search::prelude::*;
use nanorand::{Rng, WyRand};

/// A grid of `size * size` Nodes, each connected to its right and lower neighbor.
///
/// Weights are at least 1 (the Manhattan distance of neighbors), so both Heuristics stay consistent.
fn grid_graph(size: i64, seed: u64) -> Graph {
    let mut rng = WyRand::new_seed(seed);
    let mut graph = Graph::new();
    let id = |x: i64, y: i64| y * size + x;

    for y in 0..size {
        for x in 0..size {
            graph.insert_node(Node::new(id(x, y), x, y));
        }
    }
    for y in 0..size {
        for x in 0..size {
            if x + 1 < size {
                let weight = 1.0 + rng.generate_range(0_u64..4) as f64;
                graph.add_edge(id(x, y), id(x + 1, y), weight);
            }
            if y + 1 < size {
                let weight = 1.0 + rng.generate_range(0_u64..4) as f64;
                graph.add_edge(id(x, y), id(x, y + 1), weight);
            }
        }
    }
    graph.set_source(id(0, 0));
    graph.set_destination(id(size - 1, size - 1));
    graph
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "warn") // Change this to debug to log the statistics of every search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search Modes");
    group.sample_size(20);

    init();

    for size in [32, 128] {
        let graph = grid_graph(size, 4);
        for mode in SearchMode::ALL {
            group.bench_with_input(
                BenchmarkId::new(mode.label(), format!("{}x{}", size, size)),
                &graph,
                |b, graph| b.iter(|| mode.run(graph)),
            );
        }
    }
}

fn bench_run_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("All Modes");
    group.sample_size(10);

    let graph = grid_graph(256, 7);

    group.bench_function("Sequential, 256x256", |b| {
        b.iter(|| run(&graph, &RunConfig::SEQUENTIAL))
    });

    #[cfg(feature = "parallel")]
    {
        group.bench_function("Parallel, 256x256", |b| {
            b.iter(|| run(&graph, &RunConfig::default()))
        });
    }
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parse");

    let mut text = String::from("S,0\nD,99\n");
    for id in 0..100 {
        text.push_str(&format!("{},{}\n", id, id));
    }
    for id in 0..99 {
        text.push_str(&format!("{},{},{}\n", id, id + 1, 1 + id % 3));
        text.push_str(&format!("{},{},{}.5\n", id, (id * 7) % 100, 10 + id % 5));
    }

    group.bench_function("100 nodes, 198 edges", |b| b.iter(|| Graph::parse(&text)));
}

criterion_group!(benches, bench_modes, bench_run_all, bench_parse);
criterion_main!(benches);
