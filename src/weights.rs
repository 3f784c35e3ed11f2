use std::collections::HashMap;
use std::fmt::Debug;

use num_traits::{One, Zero};
use ordered_float::OrderedFloat;

use crate::{Error, Result};

/// Numeric type usable as an edge weight and a path distance.
///
/// The largest value of the type doubles as "infinity" for unreached vertices.
/// Weights are expected to be non-negative.
pub trait Weight: Copy + Debug + Ord + Zero + One + Send + Sync + 'static {
    /// The "unreached" sentinel, the maximum value of the type
    fn infinity() -> Self;

    /// Returns true if this value is the infinity sentinel
    fn is_infinite(&self) -> bool {
        *self == Self::infinity()
    }

    /// Adds two weights, keeping infinity absorbing instead of overflowing
    fn add_or_infinity(self, rhs: Self) -> Self;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn add_or_infinity(self, rhs: Self) -> Self {
                    if self.is_infinite() || rhs.is_infinite() {
                        return Self::infinity();
                    }
                    self.saturating_add(rhs)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                fn infinity() -> Self {
                    OrderedFloat(<$t>::INFINITY)
                }

                fn add_or_infinity(self, rhs: Self) -> Self {
                    if Weight::is_infinite(&self) || Weight::is_infinite(&rhs) {
                        return Self::infinity();
                    }
                    // IEEE addition already rounds overflow to +inf
                    self + rhs
                }
            }
        )*
    };
}

float_weight!(f32, f64);

/// Weight lookup by ordered vertex pair
pub trait DistanceMatrix<W: Weight> {
    /// Weight of the edge from `from` to `to`
    fn weight(&self, from: usize, to: usize) -> W;

    /// Number of vertices the lookup covers, if it is bounded.
    ///
    /// Searches reject bounded lookups smaller than the graph.
    fn dimension(&self) -> Option<usize> {
        None
    }
}

/// Every edge has weight one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitWeights;

impl<W: Weight> DistanceMatrix<W> for UnitWeights {
    fn weight(&self, _from: usize, _to: usize) -> W {
        W::one()
    }
}

impl<W, F> DistanceMatrix<W> for F
where
    W: Weight,
    F: Fn(usize, usize) -> W,
{
    fn weight(&self, from: usize, to: usize) -> W {
        self(from, to)
    }
}

/// A dense row-major `n x n` weight matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<W: Weight> {
    dimension: usize,
    data: Vec<W>,
}

impl<W: Weight> DenseMatrix<W> {
    /// Creates an `n x n` matrix with every entry set to `value`
    pub fn filled(dimension: usize, value: W) -> Self {
        DenseMatrix {
            dimension,
            data: vec![value; dimension * dimension],
        }
    }

    /// Builds a matrix from square rows
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let dimension = rows.len();
        let mut data = Vec::with_capacity(dimension * dimension);
        for row in rows {
            if row.len() != dimension {
                return Err(Error::DimensionMismatch {
                    expected: dimension,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(DenseMatrix { dimension, data })
    }

    /// Sets the weight of `from -> to`
    pub fn set(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if from >= self.dimension || to >= self.dimension {
            return Err(Error::InvalidEdge {
                from,
                to,
                vertex_count: self.dimension,
            });
        }
        self.data[from * self.dimension + to] = weight;
        Ok(())
    }
}

impl<W: Weight> DistanceMatrix<W> for DenseMatrix<W> {
    fn weight(&self, from: usize, to: usize) -> W {
        self.data[from * self.dimension + to]
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.dimension)
    }
}

/// Weights for a sparse set of pairs, with a fallback for everything else
#[derive(Debug, Clone)]
pub struct SparseWeights<W: Weight> {
    default: W,
    weights: HashMap<(usize, usize), W>,
}

impl<W: Weight> SparseWeights<W> {
    /// Creates an empty lookup that answers `default` for unknown pairs
    pub fn new(default: W) -> Self {
        SparseWeights {
            default,
            weights: HashMap::new(),
        }
    }

    /// Sets the weight of `from -> to`, returning the previous value
    pub fn insert(&mut self, from: usize, to: usize, weight: W) -> Option<W> {
        self.weights.insert((from, to), weight)
    }

    /// Sets the weight of both `from -> to` and `to -> from`
    pub fn insert_symmetric(&mut self, a: usize, b: usize, weight: W) {
        self.weights.insert((a, b), weight);
        self.weights.insert((b, a), weight);
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl<W: Weight> Extend<(usize, usize, W)> for SparseWeights<W> {
    fn extend<I: IntoIterator<Item = (usize, usize, W)>>(&mut self, iter: I) {
        for (from, to, weight) in iter {
            self.weights.insert((from, to), weight);
        }
    }
}

impl<W: Weight> DistanceMatrix<W> for SparseWeights<W> {
    fn weight(&self, from: usize, to: usize) -> W {
        self.weights
            .get(&(from, to))
            .copied()
            .unwrap_or(self.default)
    }
}
