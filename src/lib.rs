//! Dijkstra Paths - multi-source shortest paths with path counting
//!
//! This library runs Dijkstra's algorithm from one or many source vertices over a
//! directed or undirected graph with non-negative edge weights. Every search produces
//! a [`PathState`] holding distances, parent pointers, path counts and (optionally)
//! every equally-short predecessor of each vertex, so that all shortest paths can be
//! enumerated afterwards.
//!
//! Many independent single-source searches can be fanned out over a rayon pool with
//! [`shortest_paths_parallel`] or [`ParallelDijkstra`].
//!
//! Edge weights must be non-negative. Negative weights are not detected and give
//! undefined (but memory-safe) results.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod weights;

pub use algorithm::{
    dijkstra::Dijkstra, parallel::ParallelDijkstra, PathState, ShortestPathAlgorithm, NO_PARENT,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyList, Graph};
pub use weights::{DenseMatrix, DistanceMatrix, SparseWeights, UnitWeights, Weight};

/// Why a source list was rejected
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("source list is empty")]
    Empty,

    #[error("source vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    #[error("source vertex {0} appears more than once")]
    Duplicate(usize),
}

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid source: {0}")]
    InvalidSource(#[from] SourceError),

    #[error("Invalid graph access: vertex {vertex} has neighbor {neighbor} but the graph has {vertex_count} vertices")]
    InvalidGraphAccess {
        vertex: usize,
        neighbor: usize,
        vertex_count: usize,
    },

    #[error("Invalid edge: from {from} to {to} in a graph with {vertex_count} vertices")]
    InvalidEdge {
        from: usize,
        to: usize,
        vertex_count: usize,
    },

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Multi-source shortest paths from `sources`.
///
/// Pass [`UnitWeights`] as `weights` to treat every edge as length one.
pub fn shortest_paths<W, G, D>(
    graph: &G,
    sources: &[usize],
    weights: &D,
    all_paths: bool,
) -> Result<PathState<W>>
where
    W: Weight,
    G: Graph + ?Sized,
    D: DistanceMatrix<W> + ?Sized,
{
    Dijkstra::new()
        .with_all_paths(all_paths)
        .compute_shortest_paths(graph, sources, weights)
}

/// Single-source form of [`shortest_paths`].
pub fn shortest_paths_from<W, G, D>(
    graph: &G,
    source: usize,
    weights: &D,
    all_paths: bool,
) -> Result<PathState<W>>
where
    W: Weight,
    G: Graph + ?Sized,
    D: DistanceMatrix<W> + ?Sized,
{
    shortest_paths(graph, &[source], weights, all_paths)
}

/// One independent single-source search per entry of `sources`, run in parallel.
///
/// `result[i]` equals `shortest_paths_from(graph, sources[i], weights, all_paths)`.
pub fn shortest_paths_parallel<W, G, D>(
    graph: &G,
    sources: &[usize],
    weights: &D,
    all_paths: bool,
) -> Result<Vec<PathState<W>>>
where
    W: Weight,
    G: Graph + Sync + ?Sized,
    D: DistanceMatrix<W> + Sync + ?Sized,
{
    ParallelDijkstra::new(Dijkstra::new().with_all_paths(all_paths))
        .compute_per_source(graph, sources, weights)
}
