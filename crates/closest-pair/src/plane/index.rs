use crate::point::Point;

/// The same points sorted two ways: by ascending x and by ascending y.
///
/// Both sorts are stable, so ties keep input order and the views are
/// deterministic for a given input sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortedIndex {
    by_x: Vec<Point>,
    by_y: Vec<Point>,
}

impl SortedIndex {
    pub fn new(points: &[Point]) -> Self {
        let mut by_x = points.to_vec();
        let mut by_y = points.to_vec();
        by_x.sort_by_key(|p| p.x);
        by_y.sort_by_key(|p| p.y);
        Self { by_x, by_y }
    }

    #[inline]
    pub fn by_x(&self) -> &[Point] {
        &self.by_x
    }

    #[inline]
    pub fn by_y(&self) -> &[Point] {
        &self.by_y
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_x.is_empty()
    }
}
