use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier of `(vertex, tentative distance)` entries without decrease-key.
///
/// An improvement pushes a fresh entry and leaves the old one behind. Entries whose
/// distance is worse than the vertex's current best are stale and dropped by
/// [`Frontier::pop_current`].
#[derive(Debug)]
pub struct Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, usize)>>,
    /// Number of stale entries dropped so far
    stale: usize,
}

impl<P> Default for Frontier<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            stale: 0,
        }
    }

    /// Creates an empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            stale: 0,
        }
    }

    /// Returns true if the frontier holds no entries, stale ones included
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Number of stale entries skipped by `pop_current`
    pub fn stale_skipped(&self) -> usize {
        self.stale
    }

    /// Pushes a vertex with its tentative distance
    pub fn push(&mut self, vertex: usize, distance: P) {
        self.heap.push(Reverse((distance, vertex)));
    }

    /// Removes the entry with the smallest distance, stale or not.
    ///
    /// Ties are broken by the smaller vertex id.
    fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((distance, vertex))| (vertex, distance))
    }

    /// Removes the smallest entry that still matches `best[vertex]`, skipping stale ones
    pub fn pop_current(&mut self, best: &[P]) -> Option<(usize, P)> {
        while let Some((vertex, distance)) = self.pop() {
            if distance > best[vertex] {
                self.stale += 1;
                log::trace!(
                    "skipping stale frontier entry for vertex {} ({:?} > {:?})",
                    vertex,
                    distance,
                    best[vertex]
                );
                continue;
            }
            return Some((vertex, distance));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_distance_order() {
        let mut frontier = Frontier::new();
        frontier.push(3, 7u32);
        frontier.push(1, 2);
        frontier.push(2, 2);
        frontier.push(0, 5);

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(order, vec![(1, 2), (2, 2), (0, 5), (3, 7)]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn stale_entries_are_skipped() {
        let mut frontier = Frontier::with_capacity(4);
        let mut best = vec![u32::MAX; 3];

        best[1] = 9;
        frontier.push(1, 9);
        best[2] = 4;
        frontier.push(2, 4);
        // vertex 1 improves after its first push
        best[1] = 3;
        frontier.push(1, 3);
        assert_eq!(frontier.len(), 3);

        assert_eq!(frontier.pop_current(&best), Some((1, 3)));
        assert_eq!(frontier.pop_current(&best), Some((2, 4)));
        assert_eq!(frontier.pop_current(&best), None);
        assert_eq!(frontier.stale_skipped(), 1);
    }
}
