use std::fmt::Debug;

/// Read-only view of a graph with vertices `0..vertex_count()`
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over the out-neighbors of a vertex.
    ///
    /// For undirected graphs these are all adjacent vertices.
    fn out_neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns true if edges have a direction
    fn is_directed(&self) -> bool {
        true
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

/// Plain adjacency lists: `self[v]` are the out-neighbors of `v`.
///
/// Entries are not validated, so a list may name a vertex that does not exist.
/// Searches report that as [`crate::Error::InvalidGraphAccess`].
impl Graph for Vec<Vec<usize>> {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn out_neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        match self.get(vertex) {
            Some(neighbors) => Box::new(neighbors.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}
