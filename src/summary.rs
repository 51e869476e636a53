use std::fmt::{self, Display};

use itertools::{Itertools, MinMaxResult};

use crate::coords::Coords;

/// Vertex count and inclusive per-axis ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub x_range: (i64, i64),
    pub y_range: (i64, i64),
}

fn range(values: &[i64]) -> Option<(i64, i64)> {
    match values.iter().copied().minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

impl Summary {
    /// `None` for empty input.
    pub fn of(coords: &Coords) -> Option<Self> {
        Some(Self {
            count: coords.len(),
            x_range: range(coords.xs())?,
            y_range: range(coords.ys())?,
        })
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loaded {} coordinates", self.count)?;
        writeln!(f, "X range: {} to {}", self.x_range.0, self.x_range.1)?;
        write!(f, "Y range: {} to {}", self.y_range.0, self.y_range.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_coordinates;

    #[test]
    fn single_point_ranges() {
        let coords = parse_coordinates("10,20\n".as_bytes()).unwrap();
        let summary = Summary::of(&coords).unwrap();
        assert_eq!(
            summary.to_string(),
            "Loaded 1 coordinates\nX range: 10 to 10\nY range: 20 to 20"
        );
    }

    #[test]
    fn triangle_ranges() {
        let coords =
            parse_coordinates("0,0\n10,0\n10,10\n\n".as_bytes()).unwrap();
        let summary = Summary::of(&coords).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.x_range, (0, 10));
        assert_eq!(summary.y_range, (0, 10));
    }

    #[test]
    fn ranges_are_true_extremes() {
        let coords =
            parse_coordinates("5,-2\n-7,9\n3,4\n12,0\n".as_bytes()).unwrap();
        let summary = Summary::of(&coords).unwrap();
        assert_eq!(summary.x_range, (-7, 12));
        assert_eq!(summary.y_range, (-2, 9));
    }

    #[test]
    fn empty_has_no_summary() {
        assert!(Summary::of(&Coords::default()).is_none());
    }
}
