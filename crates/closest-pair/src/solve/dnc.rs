//! Divide and conquer over x- and y-sorted views.
//!
//! Each level splits `by_x` at its midpoint index (a size split, not a value
//! split), stably partitions `by_y` into the matching y-ordered halves,
//! recurses, then checks the vertical strip around the dividing line. The
//! y-ordered halves are produced by filtering, never by re-sorting, which
//! keeps every level linear and the whole solve O(n log n).

use std::collections::HashSet;

use super::brute::brute_force;
use super::SolveError;
use crate::point::{Point, Solution};

/// Closest pair of the points held by `by_x` (sorted by x) and `by_y`
/// (the same points sorted by y).
///
/// Requires at least 2 points. Both views must hold the same distinct
/// points; this is checked once up front, after which every level's split
/// of `by_y` is exact.
pub fn closest_pair(by_x: &[Point], by_y: &[Point]) -> Result<Solution, SolveError> {
    check_views(by_x, by_y)?;
    let best = solve_level(by_x, by_y)?;
    tracing::debug!(
        n = by_x.len(),
        a = %best.pair[0],
        b = %best.pair[1],
        dist_sq = best.dist_sq,
        "closest pair"
    );
    Ok(best)
}

/// `by_y` must be a permutation of `by_x`, and neither may repeat a point.
fn check_views(by_x: &[Point], by_y: &[Point]) -> Result<(), SolveError> {
    if by_x.len() != by_y.len() {
        return Err(SolveError::MismatchedViews {
            by_x: by_x.len(),
            by_y: by_y.len(),
        });
    }
    let mut xs: HashSet<Point> = HashSet::with_capacity(by_x.len());
    for p in by_x {
        if !xs.insert(*p) {
            return Err(SolveError::DuplicatePoint { point: *p });
        }
    }
    let mut ys: HashSet<Point> = HashSet::with_capacity(by_y.len());
    for p in by_y {
        if !xs.contains(p) {
            return Err(SolveError::ForeignPoint { point: *p });
        }
        if !ys.insert(*p) {
            return Err(SolveError::DuplicatePoint { point: *p });
        }
    }
    Ok(())
}

fn solve_level(by_x: &[Point], by_y: &[Point]) -> Result<Solution, SolveError> {
    let n = by_x.len();
    if n <= 3 {
        return brute_force(by_x);
    }

    let mid = n / 2;
    let (p_left, p_right) = by_x.split_at(mid);
    let q = partition_by_half(by_y, p_left);
    let (q_left, q_right) = q.split_at(mid);

    let left = solve_level(p_left, q_left)?;
    let right = solve_level(p_right, q_right)?;
    let mut best = if left.dist_sq <= right.dist_sq {
        left
    } else {
        right
    };

    let mid_x = i64::from(p_left[mid - 1].x);
    let strip: Vec<Point> = by_y
        .iter()
        .copied()
        .filter(|p| {
            let dx = i64::from(p.x) - mid_x;
            dx * dx < best.dist_sq
        })
        .collect();
    scan_strip(&strip, &mut best);
    Ok(best)
}

/// Stable partition of `by_y` into `[points of left..., other points...]`,
/// each part still in y order.
fn partition_by_half(by_y: &[Point], left: &[Point]) -> Vec<Point> {
    let members: HashSet<Point> = left.iter().copied().collect();
    let mut out = Vec::with_capacity(by_y.len());
    out.extend(by_y.iter().filter(|p| members.contains(*p)));
    out.extend(by_y.iter().filter(|p| !members.contains(*p)));
    out
}

/// Compare each strip point with its y-successors while their y gap could
/// still beat `best`. Only strict improvements replace `best`.
fn scan_strip(strip: &[Point], best: &mut Solution) {
    for (i, a) in strip.iter().enumerate() {
        for b in &strip[i + 1..] {
            let dy = i64::from(b.y) - i64::from(a.y);
            if dy * dy >= best.dist_sq {
                break;
            }
            let d = a.dist_sq(b);
            if d < best.dist_sq {
                *best = Solution {
                    pair: [*a, *b],
                    dist_sq: d,
                };
            }
        }
    }
}
