use std::fmt::Write as _;

use closest_pair::{PlaneParams, PointSet, Solution};
use serde::Serialize;

/// Result of one `solve` run, printed as text or JSON.
#[derive(Debug, Serialize)]
pub struct Report {
    pub num_points: usize,
    pub bounds: u32,
    pub seed: u64,
    pub draws: u64,
    pub pair: [[i32; 2]; 2],
    pub dist_sq: i64,
    pub distance: f64,
    pub runtime_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<[i32; 2]>>,
    #[serde(skip)]
    points_text: Option<String>,
}

impl Report {
    pub fn new(
        params: PlaneParams,
        seed: u64,
        set: &PointSet,
        solution: &Solution,
        runtime_ms: u64,
        show_points: bool,
    ) -> Self {
        let [a, b] = solution.pair;
        Self {
            num_points: params.num_points,
            bounds: params.bounds,
            seed,
            draws: set.draws(),
            pair: [[a.x, a.y], [b.x, b.y]],
            dist_sq: solution.dist_sq,
            distance: solution.distance(),
            runtime_ms,
            points: show_points.then(|| set.index().by_x().iter().map(|p| [p.x, p.y]).collect()),
            points_text: show_points.then(|| set.to_string()),
        }
    }

    pub fn to_text(&self) -> String {
        let [a, b] = self.pair;
        let mut out = String::new();
        if let Some(points) = &self.points_text {
            let _ = writeln!(out, "Points: {points}");
        }
        let _ = writeln!(
            out,
            "Closest Pair: ({}, {}) and ({}, {})",
            a[0], a[1], b[0], b[1]
        );
        let _ = writeln!(out, "Distance: {}", format_distance(self.distance));
        let _ = writeln!(out, "Runtime: {} ms", self.runtime_ms);
        let _ = write!(out, "Seed: {}", self.seed);
        out
    }
}

/// At most three decimals, trailing zeros dropped (`1`, `2.5`, `1.414`).
pub fn format_distance(d: f64) -> String {
    let s = format!("{d:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}
