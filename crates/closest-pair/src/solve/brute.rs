use super::SolveError;
use crate::point::{Point, Solution};

/// Closest pair among exactly 2 or 3 points.
///
/// On a tie among three points the first minimal pair in the order
/// `(0,1), (1,2), (0,2)` is returned.
pub fn brute_force(points: &[Point]) -> Result<Solution, SolveError> {
    match points {
        [a, b] => Ok(Solution::new(*a, *b)),
        [a, b, c] => {
            let mut best = Solution::new(*a, *b);
            for s in [Solution::new(*b, *c), Solution::new(*a, *c)] {
                if s.dist_sq < best.dist_sq {
                    best = s;
                }
            }
            Ok(best)
        }
        _ => Err(SolveError::InvalidBruteForceInput { len: points.len() }),
    }
}

/// Closest pair by comparing every pair. O(n²); for cross-checks and small n.
pub fn closest_pair_exhaustive(points: &[Point]) -> Result<Solution, SolveError> {
    if points.len() < 2 {
        return Err(SolveError::InvalidBruteForceInput { len: points.len() });
    }
    let mut best = Solution::new(points[0], points[1]);
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d = a.dist_sq(b);
            if d < best.dist_sq {
                best = Solution {
                    pair: [*a, *b],
                    dist_sq: d,
                };
            }
        }
    }
    Ok(best)
}
