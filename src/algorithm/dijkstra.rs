use std::collections::{HashSet, VecDeque};

use crate::algorithm::{PathState, ShortestPathAlgorithm, NO_PARENT};
use crate::data_structures::Frontier;
use crate::graph::Graph;
use crate::weights::{DistanceMatrix, Weight};
use crate::{Error, Result, SourceError};

/// Classic Dijkstra's algorithm, generalized to several sources.
///
/// A multi-source search behaves like a single search from a virtual vertex with
/// zero-weight edges to every source. Edge weights must be non-negative; negative
/// weights are not checked and give undefined results.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra<W: Weight> {
    /// Record every equally-short predecessor, not only the parent
    all_paths: bool,
    /// Relaxations longer than this are dropped
    max_distance: Option<W>,
    /// Record the order in which vertices are settled
    track_vertices: bool,
}

impl<W: Weight> Default for Dijkstra<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> Dijkstra<W> {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            all_paths: false,
            max_distance: None,
            track_vertices: false,
        }
    }

    /// Enable or disable tracking of all shortest-path predecessors
    pub fn with_all_paths(mut self, all_paths: bool) -> Self {
        self.all_paths = all_paths;
        self
    }

    /// Stop relaxing edges that would lead past `max_distance`
    pub fn with_max_distance(mut self, max_distance: W) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Enable or disable recording of the settle order
    pub fn with_track_vertices(mut self, track_vertices: bool) -> Self {
        self.track_vertices = track_vertices;
        self
    }
}

/// Checks that a single source names a vertex of the graph
pub(crate) fn check_source(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex >= vertex_count {
        return Err(SourceError::OutOfRange {
            vertex,
            vertex_count,
        }
        .into());
    }
    Ok(())
}

/// Checks that a source list is non-empty, in range and free of duplicates
pub(crate) fn validate_sources(sources: &[usize], vertex_count: usize) -> Result<()> {
    if sources.is_empty() {
        return Err(SourceError::Empty.into());
    }

    let mut seen = HashSet::with_capacity(sources.len());
    for &source in sources {
        check_source(source, vertex_count)?;
        if !seen.insert(source) {
            return Err(SourceError::Duplicate(source).into());
        }
    }
    Ok(())
}

/// Rejects bounded weight lookups that do not cover every vertex
pub(crate) fn check_dimension<W, D>(weights: &D, vertex_count: usize) -> Result<()>
where
    W: Weight,
    D: DistanceMatrix<W> + ?Sized,
{
    match weights.dimension() {
        Some(found) if found < vertex_count => Err(Error::DimensionMismatch {
            expected: vertex_count,
            found,
        }),
        _ => Ok(()),
    }
}

/// Counts shortest paths once every distance is final.
///
/// The tight edges (`distances[u] + weight(u, v) == distances[v]`) form the
/// shortest-path DAG. Counts are pushed along it in topological order, so a
/// vertex only passes its count on after every equally-short route into it,
/// zero-weight ones included, has been added. Vertices on a zero-weight cycle
/// have no topological order; they follow in settle order and the edge that
/// closes the cycle is not counted.
fn count_paths<W, G, D>(
    graph: &G,
    weights: &D,
    distances: &[W],
    is_source: &[bool],
    settled: &[usize],
    all_paths: bool,
) -> Result<(Vec<u64>, Vec<Vec<usize>>)>
where
    W: Weight,
    G: Graph + ?Sized,
    D: DistanceMatrix<W> + ?Sized,
{
    let n = distances.len();
    let mut tight: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut in_degree = vec![0usize; n];
    for &u in settled {
        for v in graph.out_neighbors(u) {
            if v >= n {
                return Err(Error::InvalidGraphAccess {
                    vertex: u,
                    neighbor: v,
                    vertex_count: n,
                });
            }
            if is_source[v] || v == u {
                continue;
            }
            let alt = distances[u].add_or_infinity(weights.weight(u, v));
            if !alt.is_infinite() && alt == distances[v] {
                tight[u].push(v);
                in_degree[v] += 1;
            }
        }
    }

    // Kahn's algorithm, seeded in settle order
    let mut order = Vec::with_capacity(settled.len());
    let mut placed = vec![false; n];
    let mut queue: VecDeque<usize> = settled
        .iter()
        .copied()
        .filter(|&v| in_degree[v] == 0)
        .collect();
    while let Some(u) = queue.pop_front() {
        order.push(u);
        placed[u] = true;
        for &v in &tight[u] {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push_back(v);
            }
        }
    }
    if order.len() < settled.len() {
        log::debug!(
            "{} vertices lie on zero-weight cycles",
            settled.len() - order.len()
        );
        order.extend(settled.iter().copied().filter(|&v| !placed[v]));
    }

    let mut position = vec![0usize; n];
    for (i, &v) in order.iter().enumerate() {
        position[v] = i;
    }

    let mut path_counts = vec![0u64; n];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    for v in (0..n).filter(|&v| is_source[v]) {
        path_counts[v] = 1;
    }
    for &u in &order {
        for &v in &tight[u] {
            if position[v] <= position[u] {
                continue;
            }
            path_counts[v] = path_counts[v].saturating_add(path_counts[u]);
            if all_paths {
                predecessors[v].push(u);
            }
        }
    }

    Ok((path_counts, predecessors))
}

impl<W: Weight> ShortestPathAlgorithm<W> for Dijkstra<W> {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths<G, D>(
        &self,
        graph: &G,
        sources: &[usize],
        weights: &D,
    ) -> Result<PathState<W>>
    where
        G: Graph + ?Sized,
        D: DistanceMatrix<W> + ?Sized,
    {
        let n = graph.vertex_count();
        if let Err(err) = validate_sources(sources, n) {
            log::warn!("rejecting Dijkstra search: {}", err);
            return Err(err);
        }
        check_dimension(weights, n)?;

        log::debug!(
            "Dijkstra from {} source(s) over {} vertices (all_paths={})",
            sources.len(),
            n,
            self.all_paths
        );

        let mut distances = vec![W::infinity(); n];
        let mut parents = vec![NO_PARENT; n];
        let mut visited = vec![false; n];
        let mut is_source = vec![false; n];
        let mut settled = Vec::new();

        // Seed the frontier with every source at distance zero
        let mut frontier = Frontier::with_capacity(sources.len());
        for &source in sources {
            distances[source] = W::zero();
            visited[source] = true;
            is_source[source] = true;
            frontier.push(source, W::zero());
        }

        // Main Dijkstra loop
        while let Some((u, dist_u)) = frontier.pop_current(&distances) {
            settled.push(u);

            // Relax all outgoing edges
            for v in graph.out_neighbors(u) {
                if v >= n {
                    log::warn!("vertex {} reports neighbor {} outside the graph", u, v);
                    return Err(Error::InvalidGraphAccess {
                        vertex: u,
                        neighbor: v,
                        vertex_count: n,
                    });
                }
                // A source is its own shortest path, whatever other sources contribute,
                // and a self-loop never shortens a path
                if is_source[v] || v == u {
                    continue;
                }

                let alt = dist_u.add_or_infinity(weights.weight(u, v));
                if alt.is_infinite() {
                    continue;
                }
                if let Some(max_distance) = self.max_distance {
                    if alt > max_distance {
                        continue;
                    }
                }

                if !visited[v] || alt < distances[v] {
                    visited[v] = true;
                    distances[v] = alt;
                    parents[v] = u;
                    frontier.push(v, alt);
                }
            }
        }

        let (path_counts, predecessors) = count_paths(
            graph,
            weights,
            &distances,
            &is_source,
            &settled,
            self.all_paths,
        )?;

        log::debug!(
            "Dijkstra settled {} of {} vertices ({} stale frontier entries skipped)",
            settled.len(),
            n,
            frontier.stale_skipped()
        );

        Ok(PathState::from_parts(
            parents,
            distances,
            predecessors,
            path_counts,
            if self.track_vertices { settled } else { Vec::new() },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyList;
    use crate::weights::{SparseWeights, UnitWeights};

    fn line() -> AdjacencyList {
        AdjacencyList::undirected(4, [(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn line_graph_from_one_end() {
        let state: PathState<u32> = Dijkstra::new()
            .compute_from(&line(), 0, &UnitWeights)
            .unwrap();
        assert_eq!(state.distances(), &[0, 1, 2, 3]);
        assert_eq!(state.parents(), &[NO_PARENT, 0, 1, 2]);
        assert_eq!(state.path_counts(), &[1, 1, 1, 1]);
        assert!(state.predecessors().iter().all(|p| p.is_empty()));
    }

    #[test]
    fn line_graph_from_both_ends() {
        let state: PathState<u32> = Dijkstra::new()
            .compute_shortest_paths(&line(), &[0, 3], &UnitWeights)
            .unwrap();
        assert_eq!(state.distances(), &[0, 1, 1, 0]);
        assert_eq!(state.path_counts(), &[1, 1, 1, 1]);
        assert_eq!(state.parents(), &[NO_PARENT, 0, 3, NO_PARENT]);
    }

    #[test]
    fn diamond_counts_both_paths() {
        let g = AdjacencyList::directed(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        let state: PathState<u32> = Dijkstra::new()
            .with_all_paths(true)
            .compute_from(&g, 0, &UnitWeights)
            .unwrap();
        assert_eq!(state.distances()[3], 2);
        assert_eq!(state.path_counts()[3], 2);
        let mut preds = state.predecessors()[3].clone();
        preds.sort_unstable();
        assert_eq!(preds, vec![1, 2]);
        assert!(state.predecessors()[3].contains(&state.parents()[3]));
    }

    #[test]
    fn longer_ties_are_dropped_once_a_shorter_route_appears() {
        // 0 -> 3 costs 10 directly and 3 via 1 -> 2 -> 3; 0 -> 4 -> 3 ties the direct edge
        // before the shorter route is found
        let g = AdjacencyList::directed(5, [(0, 3), (0, 4), (4, 3), (0, 1), (1, 2), (2, 3)])
            .unwrap();
        let mut w = SparseWeights::new(1u32);
        w.insert(0, 3, 10);
        w.insert(4, 3, 9);
        let state = Dijkstra::<u32>::new()
            .with_all_paths(true)
            .compute_from(&g, 0, &w)
            .unwrap();
        assert_eq!(state.distances()[3], 3);
        assert_eq!(state.parents()[3], 2);
        assert_eq!(state.path_counts()[3], 1);
        assert_eq!(state.predecessors()[3], vec![2]);
    }

    #[test]
    fn disconnected_vertex_stays_unreached() {
        let g = AdjacencyList::directed(5, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let state: PathState<u64> = Dijkstra::new().compute_from(&g, 0, &UnitWeights).unwrap();
        assert_eq!(state.distances()[4], u64::MAX);
        assert_eq!(state.path_counts()[4], 0);
        assert_eq!(state.parents()[4], NO_PARENT);
    }

    #[test]
    fn isolated_source_is_still_a_source() {
        let g = AdjacencyList::directed(3, [(0, 1)]).unwrap();
        let state: PathState<u32> = Dijkstra::new()
            .compute_shortest_paths(&g, &[0, 2], &UnitWeights)
            .unwrap();
        assert_eq!(state.distances()[2], 0);
        assert_eq!(state.path_counts()[2], 1);
    }

    #[test]
    fn source_reached_from_another_source_keeps_count_one() {
        let g = AdjacencyList::directed(3, [(0, 1), (1, 2)]).unwrap();
        let zero = |_: usize, _: usize| 0u32;
        let state = Dijkstra::<u32>::new()
            .with_all_paths(true)
            .compute_shortest_paths(&g, &[0, 1], &zero)
            .unwrap();
        assert_eq!(state.path_counts(), &[1, 1, 1]);
        assert_eq!(state.parents()[1], NO_PARENT);
        assert!(state.predecessors()[1].is_empty());
    }

    #[test]
    fn zero_weight_ties_are_counted_before_being_passed_on() {
        // 0 -> 1, 0 -> 2, 2 -> 1, 1 -> 3, every edge free
        let g = AdjacencyList::directed(4, [(0, 1), (0, 2), (2, 1), (1, 3)]).unwrap();
        let zero = |_: usize, _: usize| 0u32;
        let state = Dijkstra::<u32>::new()
            .with_all_paths(true)
            .compute_from(&g, 0, &zero)
            .unwrap();

        assert_eq!(state.distances(), &[0, 0, 0, 0]);
        assert_eq!(state.path_counts(), &[1, 2, 1, 2]);
        assert_eq!(state.predecessors()[1], vec![0, 2]);
        assert_eq!(state.predecessors()[3], vec![1]);
        for v in 1..4 {
            let conserved: u64 = state.predecessors()[v]
                .iter()
                .map(|&u| state.path_counts()[u])
                .sum();
            assert_eq!(state.path_counts()[v], conserved);
        }

        let mut paths = state.all_paths_to(3).unwrap();
        paths.sort();
        assert_eq!(paths, vec![vec![0, 1, 3], vec![0, 2, 1, 3]]);
        assert_eq!(paths.len() as u64, state.path_counts()[3]);
    }

    #[test]
    fn zero_weight_cycle_keeps_counts_finite() {
        let g = AdjacencyList::directed(3, [(0, 1), (1, 2), (2, 1)]).unwrap();
        let zero = |_: usize, _: usize| 0u32;
        let state = Dijkstra::<u32>::new()
            .with_all_paths(true)
            .compute_from(&g, 0, &zero)
            .unwrap();

        assert_eq!(state.path_counts(), &[1, 1, 1]);
        assert_eq!(state.predecessors()[1], vec![0]);
        assert_eq!(state.predecessors()[2], vec![1]);
        assert_eq!(state.parents(), &[NO_PARENT, 0, 1]);
    }

    #[test]
    fn invalid_sources_are_rejected() {
        let g = line();
        let d = Dijkstra::<u32>::new();
        assert_eq!(
            d.compute_shortest_paths(&g, &[], &UnitWeights).unwrap_err(),
            Error::InvalidSource(SourceError::Empty)
        );
        assert_eq!(
            d.compute_from(&g, 4, &UnitWeights).unwrap_err(),
            Error::InvalidSource(SourceError::OutOfRange {
                vertex: 4,
                vertex_count: 4
            })
        );
        assert_eq!(
            d.compute_shortest_paths(&g, &[1, 2, 1], &UnitWeights)
                .unwrap_err(),
            Error::InvalidSource(SourceError::Duplicate(1))
        );
    }

    #[test]
    fn bad_neighbor_index_is_propagated() {
        let g: Vec<Vec<usize>> = vec![vec![1], vec![5]];
        let err = Dijkstra::<u32>::new()
            .compute_from(&g, 0, &UnitWeights)
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidGraphAccess {
                vertex: 1,
                neighbor: 5,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn max_distance_cuts_the_search() {
        let g = AdjacencyList::directed(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let state: PathState<u32> = Dijkstra::new()
            .with_max_distance(2)
            .compute_from(&g, 0, &UnitWeights)
            .unwrap();
        assert_eq!(state.distance(2), Some(2));
        assert_eq!(state.distance(3), None);
        assert_eq!(state.path_counts()[3], 0);
    }

    #[test]
    fn settle_order_is_tracked_on_request() {
        let g = AdjacencyList::directed(4, [(0, 2), (2, 1), (1, 3)]).unwrap();
        let tracked: PathState<u32> = Dijkstra::new()
            .with_track_vertices(true)
            .compute_from(&g, 0, &UnitWeights)
            .unwrap();
        assert_eq!(tracked.closest_vertices(), &[0, 2, 1, 3]);

        let untracked: PathState<u32> =
            Dijkstra::new().compute_from(&g, 0, &UnitWeights).unwrap();
        assert!(untracked.closest_vertices().is_empty());
        assert_eq!(tracked, untracked);
    }

    #[test]
    fn self_loops_and_parallel_edges() {
        let g = AdjacencyList::directed(2, [(0, 0), (0, 1), (0, 1)]).unwrap();
        let state: PathState<u32> = Dijkstra::new()
            .with_all_paths(true)
            .compute_from(&g, 0, &UnitWeights)
            .unwrap();
        assert_eq!(state.distances(), &[0, 1]);
        assert_eq!(state.path_counts(), &[1, 2]);
        assert_eq!(state.predecessors()[1], vec![0, 0]);
    }

    #[test]
    fn infinite_weight_edges_are_not_followed() {
        let g = AdjacencyList::directed(2, [(0, 1)]).unwrap();
        let w = SparseWeights::new(u32::infinity());
        let state = Dijkstra::<u32>::new().compute_from(&g, 0, &w).unwrap();
        assert!(!state.is_reachable(1));
    }

    #[test]
    fn undersized_weight_matrix_is_rejected() {
        let g = line();
        let w = crate::weights::DenseMatrix::filled(2, 1u32);
        let err = Dijkstra::<u32>::new().compute_from(&g, 0, &w).unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { expected: 4, found: 2 });
    }
}
