//! Bounded integer plane: validated parameters, generated point sets, and
//! the dual-sorted index the solvers consume.
//!
//! Model
//! - A plane with `bounds = b` holds points with both coordinates in
//!   `[-b, b]`, so at most `(2b + 1)²` distinct points fit.
//! - A `PointSet` is built once (generated or from explicit points) and is
//!   immutable afterwards. Its `SortedIndex` is derived at construction.
//!
//! Code cross-refs: `solve::closest_pair`, `rand::sample_points`.

mod index;
pub mod rand;

pub use index::SortedIndex;

use std::collections::HashSet;
use std::fmt;

use crate::point::{Point, Solution};
use crate::solve::{closest_pair, SolveError};

/// Largest accepted `bounds`. Keeps every squared distance inside `i64`.
pub const MAX_BOUNDS: u32 = (1 << 30) - 1;

/// Minimum size of a generated point set.
pub const MIN_GENERATED_POINTS: usize = 3;

/// Errors surfaced while building a point set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaneError {
    /// More points requested than distinct lattice points in the square.
    CapacityExceeded {
        num_points: usize,
        bounds: u32,
        capacity: u128,
    },
    /// Too few points for a meaningful closest-pair problem.
    InsufficientPoints { num_points: usize, min: usize },
    /// `bounds` would let squared distances overflow.
    BoundsOutOfRange { bounds: u32 },
    /// An explicit point list contains the same point twice.
    DuplicatePoint { point: Point },
}

impl fmt::Display for PlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaneError::CapacityExceeded {
                num_points, bounds, ..
            } => write!(
                f,
                "{} points cannot fit in a plane with a bounds of {}.",
                num_points, bounds
            ),
            PlaneError::InsufficientPoints { min, .. } => {
                write!(f, "Number of points must be at least {}.", min)
            }
            PlaneError::BoundsOutOfRange { bounds } => write!(
                f,
                "bounds {} is too large (maximum is {}).",
                bounds, MAX_BOUNDS
            ),
            PlaneError::DuplicatePoint { point } => {
                write!(f, "point {} appears more than once.", point)
            }
        }
    }
}

impl std::error::Error for PlaneError {}

/// Plane size and point count for generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaneParams {
    pub num_points: usize,
    /// Half-width of the square: coordinates range over `[-bounds, bounds]`.
    pub bounds: u32,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            num_points: 1000,
            bounds: 1000,
        }
    }
}

impl PlaneParams {
    pub fn new(num_points: usize, bounds: u32) -> Self {
        Self { num_points, bounds }
    }

    /// Number of distinct lattice points in `[-bounds, bounds]²`.
    ///
    /// Exact for every `u32` bounds, including ones `validate` rejects.
    #[inline]
    pub fn capacity(&self) -> u128 {
        let side = 2 * u128::from(self.bounds) + 1;
        side * side
    }

    /// Fraction of the lattice the set will occupy.
    pub fn density(&self) -> f64 {
        self.num_points as f64 / self.capacity() as f64
    }

    /// Whether `n / (4·bounds²) < 0.5`, the regime where rejection sampling
    /// rarely collides.
    pub fn is_sparse(&self) -> bool {
        let b = f64::from(self.bounds);
        if b == 0.0 {
            return false;
        }
        (self.num_points as f64) / (4.0 * b * b) < 0.5
    }

    /// Checks run before any sampling. Capacity is checked first.
    pub fn validate(&self) -> Result<(), PlaneError> {
        if self.bounds > MAX_BOUNDS {
            return Err(PlaneError::BoundsOutOfRange {
                bounds: self.bounds,
            });
        }
        let capacity = self.capacity();
        if self.num_points as u128 > capacity {
            return Err(PlaneError::CapacityExceeded {
                num_points: self.num_points,
                bounds: self.bounds,
                capacity,
            });
        }
        if self.num_points < MIN_GENERATED_POINTS {
            return Err(PlaneError::InsufficientPoints {
                num_points: self.num_points,
                min: MIN_GENERATED_POINTS,
            });
        }
        Ok(())
    }
}

/// An immutable set of distinct points plus its x- and y-sorted views.
#[derive(Clone, Debug)]
pub struct PointSet {
    points: Vec<Point>,
    index: SortedIndex,
    draws: u64,
}

impl PointSet {
    /// Generate `params.num_points` distinct points from a seeded `StdRng`.
    pub fn generate(params: PlaneParams, seed: u64) -> Result<Self, PlaneError> {
        let mut rng = rand::rng_from_seed(seed);
        Self::generate_with_rng(params, &mut rng)
    }

    /// Generate with a caller-supplied random source.
    pub fn generate_with_rng<R: ::rand::Rng>(
        params: PlaneParams,
        rng: &mut R,
    ) -> Result<Self, PlaneError> {
        params.validate()?;
        let (points, draws) = rand::sample_points(params, rng);
        tracing::debug!(
            num_points = points.len(),
            bounds = params.bounds,
            draws,
            density = params.density(),
            "generated point set"
        );
        Ok(Self::from_distinct(points, draws))
    }

    /// Build from explicit points. Accepts two or more distinct points.
    pub fn from_points<I>(points: I) -> Result<Self, PlaneError>
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let points: Vec<Point> = points.into_iter().map(Into::into).collect();
        if points.len() < 2 {
            return Err(PlaneError::InsufficientPoints {
                num_points: points.len(),
                min: 2,
            });
        }
        let mut seen = HashSet::with_capacity(points.len());
        for p in &points {
            if !seen.insert(*p) {
                return Err(PlaneError::DuplicatePoint { point: *p });
            }
        }
        let draws = points.len() as u64;
        Ok(Self::from_distinct(points, draws))
    }

    fn from_distinct(points: Vec<Point>, draws: u64) -> Self {
        let index = SortedIndex::new(&points);
        Self {
            points,
            index,
            draws,
        }
    }

    /// Points in generation (or input) order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn index(&self) -> &SortedIndex {
        &self.index
    }

    /// Candidate points drawn during generation, rejected duplicates included.
    #[inline]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Closest pair via divide and conquer over the stored index.
    pub fn solve(&self) -> Result<Solution, SolveError> {
        closest_pair(self.index.by_x(), self.index.by_y())
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.index.by_x().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}
