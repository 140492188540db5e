//! Closest-pair solvers.
//!
//! - `brute_force`: exact answer for exactly 2 or 3 points (recursion leaves).
//! - `closest_pair`: divide and conquer over the dual-sorted views, O(n log n).
//! - `closest_pair_exhaustive`: all-pairs O(n²) reference.
//!
//! All comparisons use exact integer squared distances; the real distance is
//! only taken at the end via `Solution::distance`.

mod brute;
mod dnc;

pub use brute::{brute_force, closest_pair_exhaustive};
pub use dnc::closest_pair;

use std::fmt;

use crate::point::Point;

/// Errors surfaced by the solvers. Each indicates a caller bug, not bad user
/// input: a correctly built `PointSet` never produces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Brute force was handed something other than 2 or 3 points.
    InvalidBruteForceInput { len: usize },
    /// The x- and y-sorted views differ in length.
    MismatchedViews { by_x: usize, by_y: usize },
    /// The y view holds a point that is not in the x view.
    ForeignPoint { point: Point },
    /// A view holds the same point twice.
    DuplicatePoint { point: Point },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidBruteForceInput { len } => write!(
                f,
                "brute force can only solve 2 or 3 points (got {})",
                len
            ),
            SolveError::MismatchedViews { by_x, by_y } => write!(
                f,
                "sorted views disagree ({} points by x, {} by y)",
                by_x, by_y
            ),
            SolveError::ForeignPoint { point } => {
                write!(f, "point {} is in the y view but not the x view", point)
            }
            SolveError::DuplicatePoint { point } => {
                write!(f, "point {} appears more than once in a sorted view", point)
            }
        }
    }
}

impl std::error::Error for SolveError {}

#[cfg(test)]
mod tests;
