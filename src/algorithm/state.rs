#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::weights::Weight;

/// Parent of sources and of unreached vertices
pub const NO_PARENT: usize = usize::MAX;

/// Result of one Dijkstra search, single- or multi-source.
///
/// Every vector is indexed by vertex. Unreached vertices have an infinite
/// distance, a path count of zero and no parent. Sources have distance zero,
/// a path count of one, no parent and no predecessors.
///
/// Two states are equal when parents, distances, path counts and predecessors
/// are equal. The settle order in `closest_vertices` is not compared.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathState<W: Weight> {
    parents: Vec<usize>,
    distances: Vec<W>,
    predecessors: Vec<Vec<usize>>,
    path_counts: Vec<u64>,
    closest_vertices: Vec<usize>,
}

impl<W: Weight> PartialEq for PathState<W> {
    fn eq(&self, other: &Self) -> bool {
        self.parents == other.parents
            && self.distances == other.distances
            && self.path_counts == other.path_counts
            && self.predecessors == other.predecessors
    }
}

impl<W: Weight> Eq for PathState<W> {}

impl<W: Weight> PathState<W> {
    pub(crate) fn from_parts(
        parents: Vec<usize>,
        distances: Vec<W>,
        predecessors: Vec<Vec<usize>>,
        path_counts: Vec<u64>,
        closest_vertices: Vec<usize>,
    ) -> Self {
        PathState {
            parents,
            distances,
            predecessors,
            path_counts,
            closest_vertices,
        }
    }

    /// Number of vertices the state covers
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Parent of each vertex on some shortest path, [`NO_PARENT`] for sources and unreached vertices
    pub fn parents(&self) -> &[usize] {
        &self.parents
    }

    /// Shortest distance of each vertex from the nearest source, [`Weight::infinity`] if unreached
    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    /// Every predecessor on a shortest path; empty unless all-paths mode was on
    pub fn predecessors(&self) -> &[Vec<usize>] {
        &self.predecessors
    }

    /// Number of distinct shortest paths reaching each vertex
    pub fn path_counts(&self) -> &[u64] {
        &self.path_counts
    }

    /// Vertices in the order they were settled; empty unless vertex tracking was on
    pub fn closest_vertices(&self) -> &[usize] {
        &self.closest_vertices
    }

    /// Distance of `vertex`, `None` if unreached or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|d| !d.is_infinite())
    }

    /// Parent of `vertex`, `None` for sources and unreached vertices
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().filter(|&p| p != NO_PARENT)
    }

    /// Whether some source reaches `vertex`
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.path_counts.get(vertex).map_or(false, |&c| c > 0)
    }

    /// Sources are the only reached vertices without a parent
    pub fn is_source(&self, vertex: usize) -> bool {
        self.is_reachable(vertex) && self.parents[vertex] == NO_PARENT
    }

    /// Iterates over every reached vertex, sources included
    pub fn reachable_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertex_count()).filter(move |&v| self.is_reachable(v))
    }

    /// Returns one shortest path from a source to `target`, following parent pointers.
    ///
    /// `None` if `target` is unreached or out of range.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.parent(current) {
            // a parent chain longer than the graph can only be a corrupt state
            if path.len() > self.vertex_count() {
                log::warn!("parent chain from vertex {} does not reach a source", target);
                return None;
            }
            path.push(parent);
            current = parent;
        }

        path.reverse();
        Some(path)
    }

    /// Enumerates every shortest path from a source to `target`.
    ///
    /// Needs a state computed in all-paths mode; otherwise only the parent path is
    /// known and a single path comes back. `None` if `target` is unreached.
    pub fn all_paths_to(&self, target: usize) -> Option<Vec<Vec<usize>>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut paths = Vec::new();
        let mut suffix = vec![target];
        self.collect_paths(target, &mut suffix, &mut paths);
        Some(paths)
    }

    fn collect_paths(&self, vertex: usize, suffix: &mut Vec<usize>, paths: &mut Vec<Vec<usize>>) {
        if self.is_source(vertex) {
            paths.push(suffix.iter().rev().copied().collect());
            return;
        }

        let single;
        let preds: &[usize] = if self.predecessors[vertex].is_empty() {
            single = [self.parents[vertex]];
            &single
        } else {
            &self.predecessors[vertex]
        };

        for &pred in preds {
            // zero-weight cycles can put a vertex among its own ancestors
            if pred == NO_PARENT || suffix.contains(&pred) {
                continue;
            }
            suffix.push(pred);
            self.collect_paths(pred, suffix, paths);
            suffix.pop();
        }
    }
}
