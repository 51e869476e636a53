use crate::point::Point;

/// Index-aligned x and y sequences in input order.
///
/// Both vectors only grow through [`Coords::push`], so they always have the
/// same length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coords {
    xs: Vec<i64>,
    ys: Vec<i64>,
}

impl Coords {
    #[inline]
    pub fn push(&mut self, point: Point) {
        self.xs.push(point.x);
        self.ys.push(point.y);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    #[inline]
    pub fn xs(&self) -> &[i64] {
        &self.xs
    }

    #[inline]
    pub fn ys(&self) -> &[i64] {
        &self.ys
    }

    pub fn first(&self) -> Option<Point> {
        self.get(0)
    }

    pub fn get(&self, ix: usize) -> Option<Point> {
        Some(Point::new(*self.xs.get(ix)?, *self.ys.get(ix)?))
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| Point::new(x, y))
    }

    /// The polygon outline: every point, then the first one again.
    ///
    /// Has `len() + 1` points, or none for empty input.
    pub fn closed(&self) -> Vec<Point> {
        let mut outline: Vec<Point> = self.points().collect();
        if let Some(first) = self.first() {
            outline.push(first);
        }
        outline
    }
}

impl FromIterator<Point> for Coords {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        let mut coords = Coords::default();
        iter.into_iter().for_each(|p| coords.push(p));
        coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Coords {
        [(0, 0), (10, 0), (10, 10), (0, 10)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn closed_repeats_first_point() {
        let coords = square();
        let outline = coords.closed();
        assert_eq!(outline.len(), coords.len() + 1);
        assert_eq!(outline[coords.len()], outline[0]);
        assert_eq!(&outline[..coords.len()], &coords.points().collect::<Vec<_>>()[..]);
    }

    #[test]
    fn single_point_closes_on_itself() {
        let coords: Coords = std::iter::once(Point::new(10, 20)).collect();
        assert_eq!(coords.closed(), vec![Point::new(10, 20), Point::new(10, 20)]);
    }

    #[test]
    fn empty_has_no_outline() {
        let coords = Coords::default();
        assert!(coords.is_empty());
        assert!(coords.first().is_none());
        assert!(coords.closed().is_empty());
    }

    #[test]
    fn sequences_stay_aligned() {
        let coords = square();
        assert_eq!(coords.xs(), &[0, 10, 10, 0]);
        assert_eq!(coords.ys(), &[0, 0, 10, 10]);
        assert_eq!(coords.get(2), Some(Point::new(10, 10)));
        assert_eq!(coords.get(4), None);
    }
}
