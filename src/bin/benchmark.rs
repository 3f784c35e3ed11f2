use std::env;
use std::time::{Duration, Instant};

use dijkstra_paths::algorithm::ShortestPathAlgorithm;
use dijkstra_paths::graph::generators::generate_random_graph;
use dijkstra_paths::{Dijkstra, Graph, ParallelDijkstra, PathState};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Distance = OrderedFloat<f64>;

// Parses positional argument `index`, falling back to `default`
fn arg_or<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    args.get(index)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [vertices] [sources] [edge_factor]
    let args: Vec<String> = env::args().collect();
    let vertices: usize = arg_or(&args, 1, 20_000);
    let source_count: usize = arg_or(&args, 2, 64);
    let edge_factor: f64 = arg_or(&args, 3, 4.0);

    println!("=====================================================");
    println!("Benchmark: sequential vs parallel per-source Dijkstra");
    println!("Vertices: {}, sources: {}, edge factor: {}", vertices, source_count, edge_factor);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(42);
    let (graph, weights) = generate_random_graph(vertices, edge_factor, &mut rng)?;
    if graph.vertex_count() == 0 {
        println!("Nothing to do on an empty graph");
        return Ok(());
    }
    let sources: Vec<usize> = (0..source_count)
        .map(|_| rng.gen_range(0..graph.vertex_count()))
        .collect();

    for all_paths in [false, true] {
        let dijkstra = Dijkstra::<Distance>::new().with_all_paths(all_paths);

        let start = Instant::now();
        let sequential = sources
            .iter()
            .map(|&source| dijkstra.compute_from(&graph, source, &weights))
            .collect::<Result<Vec<PathState<Distance>>, _>>()?;
        let sequential_time = start.elapsed();

        let start = Instant::now();
        let parallel = ParallelDijkstra::new(dijkstra).compute_per_source(&graph, &sources, &weights)?;
        let parallel_time = start.elapsed();

        if sequential != parallel {
            return Err("parallel results differ from sequential results".into());
        }

        report(all_paths, &parallel, sequential_time, parallel_time);
    }

    Ok(())
}

fn report(all_paths: bool, states: &[PathState<Distance>], sequential: Duration, parallel: Duration) {
    let reached: usize = states.iter().map(|s| s.reachable_vertices().count()).sum();
    let avg_reached = reached as f64 / states.len().max(1) as f64;
    let speedup = sequential.as_secs_f64() / parallel.as_secs_f64().max(f64::EPSILON);

    println!("\nall_paths = {}", all_paths);
    println!("  - Average reachable vertices per source: {:.1}", avg_reached);
    println!("  - Sequential: {:?}", sequential);
    println!("  - Parallel:   {:?}", parallel);
    println!("  - Speedup:    {:.2}x", speedup);
}
