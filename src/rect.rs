use crate::config::{REFERENCE_CORNER_A, REFERENCE_CORNER_B};
use crate::point::Point;

/// An axis-aligned rectangle given by two opposite corners.
///
/// The corners are kept as given: `a` need not be the lower-left one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    a: Point,
    b: Point,
}

impl Rect {
    /// Fixed rectangle drawn next to every polygon for comparison.
    pub const REFERENCE: Rect = Rect::new(
        Point::new(REFERENCE_CORNER_A.0, REFERENCE_CORNER_A.1),
        Point::new(REFERENCE_CORNER_B.0, REFERENCE_CORNER_B.1),
    );

    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Closed loop `a -> (b.x, a.y) -> b -> (a.x, b.y) -> a`.
    pub fn outline(&self) -> [Point; 5] {
        let Self { a, b } = *self;
        [
            a,
            Point::new(b.x, a.y),
            b,
            Point::new(a.x, b.y),
            a,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_outline_is_fixed_loop() {
        let xs: Vec<i64> = Rect::REFERENCE.outline().iter().map(|p| p.x).collect();
        let ys: Vec<i64> = Rect::REFERENCE.outline().iter().map(|p| p.y).collect();
        assert_eq!(xs, [17454, 82409, 82409, 17454, 17454]);
        assert_eq!(ys, [85504, 85504, 14643, 14643, 85504]);
    }

    #[test]
    fn outline_closes_on_first_corner() {
        let rect = Rect::new(Point::new(-3, 4), Point::new(5, -6));
        let outline = rect.outline();
        assert_eq!(outline[0], outline[4]);
        assert_eq!(outline[2], Point::new(5, -6));
    }
}
