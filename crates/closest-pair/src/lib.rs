//! Planar closest pair over distinct integer points.
//!
//! Layout
//! - `point`: the integer point value type and the `Solution` pair.
//! - `plane`: seeded point-set generation and the dual-sorted (x, y) index.
//! - `solve`: brute-force base case, divide-and-conquer solver, and an
//!   exhaustive O(n²) reference used by tests and benches.
//!
//! The point set is immutable once built; every solver borrows read-only
//! slices of it.

pub mod plane;
pub mod point;
pub mod solve;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use plane::{PlaneError, PlaneParams, PointSet, SortedIndex, MAX_BOUNDS};
pub use point::{Point, Solution};
pub use solve::{brute_force, closest_pair, closest_pair_exhaustive, SolveError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::plane::{PlaneError, PlaneParams, PointSet, SortedIndex};
    pub use crate::point::{Point, Solution};
    pub use crate::solve::{closest_pair, closest_pair_exhaustive, SolveError};
}
