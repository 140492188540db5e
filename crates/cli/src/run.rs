//! Command bodies, kept free of terminal I/O so they can be tested.

use std::time::Instant;

use anyhow::{bail, Context, Result};
use closest_pair::{closest_pair_exhaustive, PlaneParams, PointSet};

use crate::report::Report;

/// Generate the plane for `seed`, solve it, and time both steps together.
pub fn solve_plane(params: PlaneParams, seed: u64, show_points: bool) -> Result<Report> {
    tracing::info!(
        num_points = params.num_points,
        bounds = params.bounds,
        seed,
        "solve"
    );
    if !params.is_sparse() {
        tracing::warn!(
            density = params.density(),
            "dense plane: number_of_points / (4(bounds * bounds)) >= 0.5, generation may be slow"
        );
    }

    let start = Instant::now();
    let set = PointSet::generate(params, seed)?;
    let solution = set.solve().context("solving closest pair")?;
    let runtime_ms = start.elapsed().as_millis() as u64;

    Ok(Report::new(
        params,
        seed,
        &set,
        &solution,
        runtime_ms,
        show_points,
    ))
}

/// Run divide and conquer and the all-pairs scan on `trials` planes seeded
/// `seed, seed + 1, ...`; fails on the first disagreement.
pub fn cross_check(params: PlaneParams, seed: u64, trials: u32) -> Result<()> {
    tracing::info!(
        num_points = params.num_points,
        bounds = params.bounds,
        seed,
        trials,
        "verify"
    );
    for trial in 0..trials {
        let trial_seed = seed.wrapping_add(u64::from(trial));
        let set = PointSet::generate(params, trial_seed)?;
        let fast = set.solve().context("divide and conquer")?;
        let slow = closest_pair_exhaustive(set.points()).context("exhaustive scan")?;
        if fast.dist_sq != slow.dist_sq {
            bail!(
                "seed {}: divide and conquer found {} ({} and {}), exhaustive found {} ({} and {})",
                trial_seed,
                fast.distance(),
                fast.pair[0],
                fast.pair[1],
                slow.distance(),
                slow.pair[0],
                slow.pair[1]
            );
        }
        tracing::debug!(seed = trial_seed, dist_sq = fast.dist_sq, "trial ok");
    }
    Ok(())
}
