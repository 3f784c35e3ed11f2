use std::fmt::Debug;

use crate::algorithm::PathState;
use crate::graph::Graph;
use crate::weights::{DistanceMatrix, Weight};
use crate::Result;

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W: Weight>: Debug {
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a set of sources to all other vertices.
    ///
    /// Sources must be non-empty, distinct and inside the graph.
    fn compute_shortest_paths<G, D>(
        &self,
        graph: &G,
        sources: &[usize],
        weights: &D,
    ) -> Result<PathState<W>>
    where
        G: Graph + ?Sized,
        D: DistanceMatrix<W> + ?Sized;

    /// Compute shortest paths from a single source vertex
    fn compute_from<G, D>(&self, graph: &G, source: usize, weights: &D) -> Result<PathState<W>>
    where
        G: Graph + ?Sized,
        D: DistanceMatrix<W> + ?Sized,
    {
        self.compute_shortest_paths(graph, &[source], weights)
    }
}
