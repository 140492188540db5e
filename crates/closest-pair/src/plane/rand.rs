//! Rejection sampling of distinct lattice points.
//!
//! Each candidate draws both coordinates uniformly from `[-bounds, bounds]`;
//! duplicates are discarded and redrawn. There is no attempt cap: the
//! expected number of draws for the last point is `1 / (1 - density)`, so a
//! nearly saturated plane (density close to 1) is the slow path.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::PlaneParams;
use crate::point::Point;

#[inline]
pub(crate) fn rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw `params.num_points` distinct points. Returns the points in
/// acceptance order and the total number of candidates drawn.
///
/// `params` must already be validated.
pub fn sample_points<R: Rng>(params: PlaneParams, rng: &mut R) -> (Vec<Point>, u64) {
    let n = params.num_points;
    let b = params.bounds as i32;
    let mut seen: HashSet<Point> = HashSet::with_capacity(n);
    let mut points = Vec::with_capacity(n);
    let mut draws: u64 = 0;
    while points.len() < n {
        let p = Point::new(rng.gen_range(-b..=b), rng.gen_range(-b..=b));
        draws += 1;
        if seen.insert(p) {
            points.push(p);
        }
    }
    (points, draws)
}
