use ordered_float::OrderedFloat;
use rand::prelude::*;

use crate::graph::AdjacencyList;
use crate::weights::{SparseWeights, Weight};
use crate::Result;

/// Generates a random directed graph with about `edge_factor * n` edges.
///
/// Returns the graph and weights drawn uniformly from `1.0..100.0`.
/// Self-loops are skipped, so the edge count can fall slightly short.
pub fn generate_random_graph<R: Rng + ?Sized>(
    n: usize,
    edge_factor: f64,
    rng: &mut R,
) -> Result<(AdjacencyList, SparseWeights<OrderedFloat<f64>>)> {
    let mut weights = SparseWeights::new(OrderedFloat::<f64>::infinity());
    let mut edges = Vec::new();

    if n > 0 {
        let num_edges = (edge_factor * n as f64) as usize;
        for _ in 0..num_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                // last weight wins for parallel edges, both copies then agree
                weights.insert(u, v, OrderedFloat(rng.gen_range(1.0..100.0)));
                edges.push((u, v));
            }
        }
    }

    Ok((AdjacencyList::directed(n, edges)?, weights))
}

/// Generates a random directed graph with small integer weights in `1..=max_weight`.
///
/// Small weight ranges produce many equal-length paths.
pub fn generate_random_integer_graph<R: Rng + ?Sized>(
    n: usize,
    edge_factor: f64,
    max_weight: u32,
    rng: &mut R,
) -> Result<(AdjacencyList, SparseWeights<u32>)> {
    let mut weights = SparseWeights::new(u32::infinity());
    let mut edges = Vec::new();

    if n > 0 {
        let num_edges = (edge_factor * n as f64) as usize;
        for _ in 0..num_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                weights.insert(u, v, rng.gen_range(1..=max_weight.max(1)));
                edges.push((u, v));
            }
        }
    }

    Ok((AdjacencyList::directed(n, edges)?, weights))
}

/// Generates an undirected 4-connected `width x height` grid
///
/// Vertex `(x, y)` has index `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> Result<AdjacencyList> {
    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push((get_index(x, y), get_index(x + 1, y)));
            }
            if y + 1 < height {
                edges.push((get_index(x, y), get_index(x, y + 1)));
            }
        }
    }

    AdjacencyList::undirected(width * height, edges)
}

/// Generates the path graph `0 - 1 - ... - (n-1)`
pub fn generate_path(n: usize, directed: bool) -> Result<AdjacencyList> {
    let edges = (1..n).map(|v| (v - 1, v));
    AdjacencyList::from_edges(n, directed, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::weights::DistanceMatrix;
    use rand::rngs::StdRng;

    #[test]
    fn random_graph_weights_cover_every_edge() {
        let mut rng = StdRng::seed_from_u64(7);
        let (graph, weights) = generate_random_graph(50, 3.0, &mut rng).unwrap();
        assert_eq!(graph.vertex_count(), 50);
        for u in 0..graph.vertex_count() {
            for v in graph.out_neighbors(u) {
                let w = weights.weight(u, v);
                assert!(w >= OrderedFloat(1.0) && w < OrderedFloat(100.0));
            }
        }
    }

    #[test]
    fn grid_has_expected_degree() {
        let grid = generate_grid(3, 3).unwrap();
        assert_eq!(grid.edge_count(), 12);
        assert_eq!(grid.out_neighbors(4).count(), 4);
        assert_eq!(grid.out_neighbors(0).count(), 2);
    }

    #[test]
    fn empty_inputs_give_empty_graphs() {
        let mut rng = StdRng::seed_from_u64(1);
        let (graph, _) = generate_random_graph(0, 2.0, &mut rng).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(generate_path(0, true).unwrap().vertex_count(), 0);
    }
}
