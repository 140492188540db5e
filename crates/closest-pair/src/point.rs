//! Integer lattice points and closest-pair results.

use std::fmt;

/// A point on the integer lattice. Equality and hashing are by coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Exact squared Euclidean distance.
    ///
    /// Does not overflow for coordinates within `±MAX_BOUNDS`.
    #[inline]
    pub fn dist_sq(&self, other: &Point) -> i64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.dist_sq(other) as f64).sqrt()
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Closest pair of two distinct points and their exact squared distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solution {
    pub pair: [Point; 2],
    pub dist_sq: i64,
}

impl Solution {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            pair: [a, b],
            dist_sq: a.dist_sq(&b),
        }
    }

    /// Euclidean distance between the two points.
    #[inline]
    pub fn distance(&self) -> f64 {
        (self.dist_sq as f64).sqrt()
    }

    /// True if `{a, b}` is this pair, in either order.
    pub fn is_pair(&self, a: Point, b: Point) -> bool {
        (self.pair[0] == a && self.pair[1] == b) || (self.pair[0] == b && self.pair[1] == a)
    }
}
