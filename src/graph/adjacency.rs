use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A fixed graph stored as adjacency lists
///
/// Undirected graphs store each edge in both endpoint lists, so
/// `out_neighbors` yields every adjacent vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    /// Whether edges have a direction
    directed: bool,

    /// Out-neighbors for each vertex
    neighbors: Vec<Vec<usize>>,

    /// Number of edges as given to the constructor
    edge_count: usize,
}

impl AdjacencyList {
    /// Builds a directed graph from `(from, to)` pairs
    pub fn directed<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self::from_edges(vertex_count, true, edges)
    }

    /// Builds an undirected graph from `(a, b)` pairs
    pub fn undirected<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self::from_edges(vertex_count, false, edges)
    }

    /// Builds a graph from an edge list, rejecting edges that name missing vertices.
    ///
    /// Self-loops and parallel edges are kept as given.
    pub fn from_edges<I>(vertex_count: usize, directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut neighbors = vec![Vec::new(); vertex_count];
        let mut edge_count = 0;

        for (from, to) in edges {
            if from >= vertex_count || to >= vertex_count {
                return Err(Error::InvalidEdge {
                    from,
                    to,
                    vertex_count,
                });
            }
            neighbors[from].push(to);
            if !directed && from != to {
                neighbors[to].push(from);
            }
            edge_count += 1;
        }

        Ok(AdjacencyList {
            directed,
            neighbors,
            edge_count,
        })
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if there's an edge between the two vertices
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors
            .get(from)
            .map_or(false, |targets| targets.contains(&to))
    }
}

impl Graph for AdjacencyList {
    fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    fn out_neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        if let Some(targets) = self.neighbors.get(vertex) {
            Box::new(targets.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}
