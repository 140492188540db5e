use super::*;
use crate::plane::{PlaneParams, PointSet, SortedIndex};
use crate::point::{Point, Solution};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn solve_points(points: &[Point]) -> Solution {
    let idx = SortedIndex::new(points);
    closest_pair(idx.by_x(), idx.by_y()).unwrap()
}

#[test]
fn three_points_hand_computed() {
    let set = PointSet::from_points([(0, 0), (3, 4), (1, 1)]).unwrap();
    let s = set.solve().unwrap();
    assert!(s.is_pair(p(0, 0), p(1, 1)));
    assert!((s.distance() - 2f64.sqrt()).abs() < 1e-9);
    assert_eq!(format!("{:.3}", s.distance()), "1.414");
}

#[test]
fn two_points_hand_computed() {
    let set = PointSet::from_points([(-5, -5), (5, 5)]).unwrap();
    let s = set.solve().unwrap();
    assert!(s.is_pair(p(-5, -5), p(5, 5)));
    assert!((s.distance() - 10.0 * 2f64.sqrt()).abs() < 1e-9);
    assert_eq!(format!("{:.3}", s.distance()), "14.142");
}

#[test]
fn four_collinear_points() {
    let s = solve_points(&[p(0, 0), p(1, 0), p(5, 0), p(6, 0)]);
    assert_eq!(s.dist_sq, 1);
    assert!((s.distance() - 1.0).abs() < 1e-12);
}

#[test]
fn pair_straddling_the_dividing_line() {
    // Each half's own closest pair is 10 apart; the answer crosses the
    // split and only shows up in the strip, which holds exactly two points.
    let pts = [p(-10, 0), p(-10, 10), p(0, 50), p(1, 50), p(10, 0), p(10, 10)];
    let s = solve_points(&pts);
    assert!(s.is_pair(p(0, 50), p(1, 50)), "got {:?}", s);
    assert_eq!(s.dist_sq, 1);
}

#[test]
fn strip_scan_updates_running_minimum() {
    // Two cross pairs inside the strip; the tighter one must win.
    let pts = [
        p(-20, 0),
        p(-20, 20),
        p(-1, 40),
        p(-1, 100),
        p(1, 41),
        p(0, 100),
        p(20, 0),
        p(20, 20),
    ];
    let s = solve_points(&pts);
    assert_eq!(s.dist_sq, 1);
    assert!(s.is_pair(p(-1, 100), p(0, 100)));
}

#[test]
fn brute_force_rejects_other_sizes() {
    let pts = [p(0, 0), p(1, 1), p(2, 2), p(3, 3)];
    for len in [0usize, 1, 4] {
        assert_eq!(
            brute_force(&pts[..len]),
            Err(SolveError::InvalidBruteForceInput { len })
        );
    }
    assert!(brute_force(&pts[..2]).is_ok());
    assert!(brute_force(&pts[..3]).is_ok());
}

#[test]
fn brute_force_three_point_tie_keeps_true_minimum() {
    // (0,0)-(1,0) and (1,0)-(2,0) tie; the first pair is kept.
    let s = brute_force(&[p(0, 0), p(1, 0), p(2, 0)]).unwrap();
    assert_eq!(s.dist_sq, 1);
    assert!(s.is_pair(p(0, 0), p(1, 0)));
}

#[test]
fn single_point_is_rejected() {
    assert_eq!(
        closest_pair(&[p(0, 0)], &[p(0, 0)]),
        Err(SolveError::InvalidBruteForceInput { len: 1 })
    );
}

#[test]
fn mismatched_views_are_rejected() {
    let by_x = [p(0, 0), p(1, 5), p(2, 1), p(3, 3)];
    assert_eq!(
        closest_pair(&by_x, &by_x[..3]),
        Err(SolveError::MismatchedViews { by_x: 4, by_y: 3 })
    );
    // Same length, but a left-half point is missing from the y view.
    let by_y = [p(0, 0), p(9, 1), p(2, 1), p(3, 3)];
    assert_eq!(
        closest_pair(&by_x, &by_y),
        Err(SolveError::ForeignPoint { point: p(9, 1) })
    );
}

#[test]
fn foreign_point_in_right_half_is_rejected() {
    // (11,0) would pair with (10,0) in the strip if it got through.
    let by_x = [p(0, 0), p(10, 0), p(20, 0), p(30, 0)];
    let by_y = [p(0, 0), p(10, 0), p(20, 0), p(11, 0)];
    assert_eq!(
        closest_pair(&by_x, &by_y),
        Err(SolveError::ForeignPoint { point: p(11, 0) })
    );
}

#[test]
fn repeated_points_in_views_are_rejected() {
    let by_x = [p(0, 0), p(0, 0), p(5, 5)];
    assert_eq!(
        closest_pair(&by_x, &by_x),
        Err(SolveError::DuplicatePoint { point: p(0, 0) })
    );
    // y view repeats one point and drops another.
    let by_x = [p(0, 0), p(1, 7), p(4, 2), p(6, 9)];
    let by_y = [p(0, 0), p(4, 2), p(4, 2), p(6, 9)];
    assert_eq!(
        closest_pair(&by_x, &by_y),
        Err(SolveError::DuplicatePoint { point: p(4, 2) })
    );
}

#[test]
fn exhaustive_requires_two_points() {
    assert_eq!(
        closest_pair_exhaustive(&[p(4, 4)]),
        Err(SolveError::InvalidBruteForceInput { len: 1 })
    );
    let s = closest_pair_exhaustive(&[p(0, 0), p(3, 4), p(1, 1), p(7, 7)]).unwrap();
    assert_eq!(s.dist_sq, 2);
}

#[test]
fn matches_exhaustive_on_seeded_sets() {
    for (n, bounds) in [(3usize, 2u32), (4, 2), (5, 3), (17, 4), (100, 50), (1000, 40)] {
        for seed in 0..8u64 {
            let set = PointSet::generate(PlaneParams::new(n, bounds), seed).unwrap();
            let fast = set.solve().unwrap();
            let slow = closest_pair_exhaustive(set.points()).unwrap();
            assert_eq!(
                fast.dist_sq, slow.dist_sq,
                "n={} bounds={} seed={}",
                n, bounds, seed
            );
            assert_eq!(fast.pair[0].dist_sq(&fast.pair[1]), fast.dist_sq);
            assert_ne!(fast.pair[0], fast.pair[1]);
        }
    }
}

#[test]
fn dense_plane_has_unit_distance() {
    let set = PointSet::generate(PlaneParams::new(9, 1), 21).unwrap();
    assert_eq!(set.solve().unwrap().dist_sq, 1);
}

#[test]
fn solving_twice_is_identical() {
    let set = PointSet::generate(PlaneParams::new(400, 1000), 77).unwrap();
    let a = set.solve().unwrap();
    let b = set.solve().unwrap();
    assert_eq!(a, b);
}
