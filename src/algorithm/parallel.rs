use std::marker::PhantomData;

use rayon::prelude::*;

use crate::algorithm::dijkstra::{check_dimension, check_source, Dijkstra};
use crate::algorithm::{PathState, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::weights::{DistanceMatrix, Weight};
use crate::{Error, Result};

/// Runs one independent single-source search per source on a rayon pool.
///
/// `result[i]` is what the wrapped algorithm returns for `sources[i]` alone. Workers
/// share the graph and the weights read-only and own everything else.
///
/// Sources are all checked before any search starts, so an invalid source is
/// reported as the first invalid one in input order. An error raised while
/// searching stops new searches from starting; searches already running finish
/// and their results are dropped. No partial result is returned.
#[derive(Debug, Clone)]
pub struct ParallelDijkstra<W: Weight, A: ShortestPathAlgorithm<W> = Dijkstra<W>> {
    algorithm: A,
    /// Worker count of a dedicated pool, `None` uses rayon's global pool
    num_threads: Option<usize>,
    _weight: PhantomData<fn() -> W>,
}

impl<W: Weight> Default for ParallelDijkstra<W> {
    fn default() -> Self {
        Self::new(Dijkstra::new())
    }
}

impl<W, A> ParallelDijkstra<W, A>
where
    W: Weight,
    A: ShortestPathAlgorithm<W> + Sync,
{
    /// Fans out `algorithm` over the global rayon pool
    pub fn new(algorithm: A) -> Self {
        ParallelDijkstra {
            algorithm,
            num_threads: None,
            _weight: PhantomData,
        }
    }

    /// Run on a dedicated pool of `num_threads` workers instead of the global one
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// The wrapped single-source algorithm
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Computes one [`PathState`] per source, in source order.
    ///
    /// Sources may repeat; each entry gets its own search. An empty source list
    /// gives an empty result.
    pub fn compute_per_source<G, D>(
        &self,
        graph: &G,
        sources: &[usize],
        weights: &D,
    ) -> Result<Vec<PathState<W>>>
    where
        G: Graph + Sync + ?Sized,
        D: DistanceMatrix<W> + Sync + ?Sized,
    {
        let n = graph.vertex_count();
        for &source in sources {
            if let Err(err) = check_source(source, n) {
                log::warn!("rejecting parallel {} dispatch: {}", self.algorithm.name(), err);
                return Err(err);
            }
        }
        check_dimension(weights, n)?;

        log::info!(
            "dispatching {} {} searches over {} vertices",
            sources.len(),
            self.algorithm.name(),
            n
        );

        let results = match self.num_threads {
            Some(num_threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()
                    .map_err(|e| Error::ThreadPool(e.to_string()))?;
                pool.install(|| self.run_all(graph, sources, weights))
            }
            None => self.run_all(graph, sources, weights),
        };

        match &results {
            Ok(states) => log::info!("finished {} searches", states.len()),
            Err(err) => log::warn!("parallel dispatch failed: {}", err),
        }
        results
    }

    fn run_all<G, D>(&self, graph: &G, sources: &[usize], weights: &D) -> Result<Vec<PathState<W>>>
    where
        G: Graph + Sync + ?Sized,
        D: DistanceMatrix<W> + Sync + ?Sized,
    {
        // indexed collect places each state in its source's slot
        sources
            .par_iter()
            .map(|&source| self.algorithm.compute_from(graph, source, weights))
            .collect()
    }
}
