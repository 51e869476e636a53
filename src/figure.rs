//! Backend-independent description of what gets drawn.
//!
//! A [`Figure`] holds series in data coordinates; the viewer decides how
//! they map onto the screen.

use std::{error::Error, fmt::Display};

use crate::{
    config::PLOT_MARGIN, coords::Coords, point::Point, rect::Rect,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotErr {
    NoVertices,
}

impl Display for PlotErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotErr::NoVertices => f.write_str("cannot plot a polygon with no vertices"),
        }
    }
}

impl Error for PlotErr {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerSize {
    Small,
    Large,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    /// Straight segments between consecutive points.
    Line,
    Markers(MarkerSize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub rgb: (u8, u8, u8),
    pub alpha: f64,
}

impl SeriesStyle {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: (r, g, b),
            alpha: 1.0,
        }
    }

    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// The color composited over a black background.
    pub fn blended(&self) -> (u8, u8, u8) {
        let alpha = self.alpha.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f64 * alpha).round() as u8;
        (scale(self.rgb.0), scale(self.rgb.1), scale(self.rgb.2))
    }
}

pub const STYLE_EDGES: SeriesStyle = SeriesStyle::opaque(0, 0, 255);
pub const STYLE_VERTICES: SeriesStyle = SeriesStyle::opaque(255, 0, 0);
pub const STYLE_START: SeriesStyle = SeriesStyle::opaque(0, 128, 0);
pub const STYLE_REFERENCE: SeriesStyle =
    SeriesStyle::opaque(255, 0, 0).with_alpha(0.7);

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub kind: SeriesKind,
    pub style: SeriesStyle,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    fn new(
        label: &str,
        kind: SeriesKind,
        style: SeriesStyle,
        points: impl IntoIterator<Item = Point>,
    ) -> Self {
        Self {
            label: label.to_string(),
            kind,
            style,
            points: points.into_iter().map(|p| p.as_f64()).collect(),
        }
    }
}

/// Data-space extent `[min_x, max_x] x [min_y, max_y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn from_center(center: (f64, f64), width: f64, height: f64) -> Self {
        Self {
            min_x: center.0 - width / 2.0,
            max_x: center.0 + width / 2.0,
            min_y: center.1 - height / 2.0,
            max_y: center.1 + height / 2.0,
        }
    }

    fn grow(self, margin: f64) -> Self {
        let pad = |span: f64| if span > 0.0 { span * margin } else { 1.0 };
        let (dx, dy) = (pad(self.width()), pad(self.height()));
        Self {
            min_x: self.min_x - dx,
            max_x: self.max_x + dx,
            min_y: self.min_y - dy,
            max_y: self.max_y + dy,
        }
    }

    /// Widens the narrower axis so a braille canvas of `cols x rows` cells
    /// shows one data unit at the same length on both axes.
    ///
    /// Each cell holds 2 x 4 dots and a cell is twice as tall as it is
    /// wide, so dots are square.
    pub fn fit_equal_aspect(&self, cols: u16, rows: u16) -> Self {
        let dots_x = (cols.max(1) as f64) * 2.0;
        let dots_y = (rows.max(1) as f64) * 4.0;
        let unit = (self.width() / dots_x).max(self.height() / dots_y);
        Self::from_center(self.center(), unit * dots_x, unit * dots_y)
    }
}

/// Round positions in `[min, max]`, spaced 1, 2 or 5 times a power of ten.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !(span > 0.0) || !span.is_finite() || target == 0 {
        return Vec::new();
    }
    let raw = span / target as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let step = match raw / magnitude {
        n if n < 1.5 => 1.0,
        n if n < 3.0 => 2.0,
        n if n < 7.0 => 5.0,
        _ => 10.0,
    } * magnitude;

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Figure {
    /// The closed polygon, its vertices, its start vertex and `reference`,
    /// in that drawing order.
    pub fn polygon(coords: &Coords, reference: &Rect) -> Result<Self, PlotErr> {
        let start = coords.first().ok_or(PlotErr::NoVertices)?;
        let series = vec![
            Series::new(
                "Polygon edges",
                SeriesKind::Line,
                STYLE_EDGES,
                coords.closed(),
            ),
            Series::new(
                "Vertices",
                SeriesKind::Markers(MarkerSize::Small),
                STYLE_VERTICES,
                coords.points(),
            ),
            Series::new(
                "Start point",
                SeriesKind::Markers(MarkerSize::Large),
                STYLE_START,
                [start],
            ),
            Series::new(
                "Rectangle",
                SeriesKind::Line,
                STYLE_REFERENCE,
                reference.outline(),
            ),
        ];
        Ok(Self {
            title: format!("Polygon Visualization ({} vertices)", coords.len()),
            x_label: "X coordinate".to_string(),
            y_label: "Y coordinate".to_string(),
            series,
        })
    }

    pub fn series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Extent of every series plus a margin on each side.
    pub fn bounds(&self) -> Bounds {
        let mut points = self.series.iter().flat_map(|s| s.points.iter());
        let Some(&(x, y)) = points.next() else {
            return Bounds::from_center((0.0, 0.0), 2.0, 2.0);
        };
        points
            .fold(
                Bounds {
                    min_x: x,
                    max_x: x,
                    min_y: y,
                    max_y: y,
                },
                |b, &(x, y)| Bounds {
                    min_x: b.min_x.min(x),
                    max_x: b.max_x.max(x),
                    min_y: b.min_y.min(y),
                    max_y: b.max_y.max(y),
                },
            )
            .grow(PLOT_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_coordinates;

    fn figure(text: &str) -> Figure {
        let coords = parse_coordinates(text.as_bytes()).unwrap();
        Figure::polygon(&coords, &Rect::REFERENCE).unwrap()
    }

    #[test]
    fn series_order_and_labels() {
        let fig = figure("0,0\n10,0\n10,10\n");
        let labels: Vec<&str> =
            fig.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Polygon edges", "Vertices", "Start point", "Rectangle"]
        );
        assert_eq!(fig.title, "Polygon Visualization (3 vertices)");
        assert_eq!(fig.x_label, "X coordinate");
        assert_eq!(fig.y_label, "Y coordinate");
    }

    #[test]
    fn outline_is_closed() {
        let fig = figure("0,0\n10,0\n10,10\n");
        let edges = fig.series("Polygon edges").unwrap();
        assert_eq!(edges.points.len(), 4);
        assert_eq!(edges.points[3], edges.points[0]);
        assert_eq!(fig.series("Vertices").unwrap().points.len(), 3);
        assert_eq!(
            fig.series("Start point").unwrap().points,
            vec![(0.0, 0.0)]
        );
    }

    #[test]
    fn single_point_outline() {
        let fig = figure("10,20");
        assert_eq!(
            fig.series("Polygon edges").unwrap().points,
            vec![(10.0, 20.0), (10.0, 20.0)]
        );
    }

    #[test]
    fn reference_is_input_independent() {
        let a = figure("0,0\n1,1\n");
        let b = figure("-500,3\n9,9\n40000,2\n");
        assert_eq!(a.series("Rectangle"), b.series("Rectangle"));
        let rect = a.series("Rectangle").unwrap();
        assert_eq!(rect.points.len(), 5);
        assert_eq!(rect.points[0], (17454.0, 85504.0));
        assert_eq!(rect.points[2], (82409.0, 14643.0));
        let (r, g, b) = rect.style.blended();
        assert!((178..=179).contains(&r) && g == 0 && b == 0);
    }

    #[test]
    fn empty_coords_fail() {
        assert_eq!(
            Figure::polygon(&Coords::default(), &Rect::REFERENCE),
            Err(PlotErr::NoVertices)
        );
    }

    #[test]
    fn bounds_cover_all_series() {
        let fig = figure("0,0\n100000,0\n");
        let b = fig.bounds();
        assert!(b.min_x < 0.0 && b.max_x > 100000.0);
        assert!(b.min_y < 0.0 && b.max_y > 85504.0);
    }

    #[test]
    fn equal_aspect_matches_dot_units() {
        let b = Bounds {
            min_x: 0.0,
            max_x: 100.0,
            min_y: 0.0,
            max_y: 10.0,
        };
        let fitted = b.fit_equal_aspect(50, 20);
        let unit_x = fitted.width() / 100.0;
        let unit_y = fitted.height() / 80.0;
        assert!((unit_x - unit_y).abs() < 1e-9);
        assert!(fitted.width() >= b.width() && fitted.height() >= b.height());
        assert_eq!(fitted.center(), b.center());
    }

    #[test]
    fn ticks_are_round() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(
            nice_ticks(13000.0, 88000.0, 6),
            vec![20000.0, 30000.0, 40000.0, 50000.0, 60000.0, 70000.0, 80000.0]
        );
        assert!(nice_ticks(5.0, 5.0, 6).is_empty());
    }
}
