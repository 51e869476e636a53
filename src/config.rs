//! Compile-time settings. Nothing here is read from flags or the
//! environment.

use tracing::Level;

/// Coordinate file, relative to the working directory.
pub const INPUT_PATH: &str = "data/inputs/09.txt";

pub const REFERENCE_CORNER_A: (i64, i64) = (17454, 85504);
pub const REFERENCE_CORNER_B: (i64, i64) = (82409, 14643);

pub const LOG_LEVEL: Level = Level::INFO;

/// Fraction of the data extent added on each side of the plot.
pub const PLOT_MARGIN: f64 = 0.05;

/// Approximate number of grid lines per axis.
pub const GRID_TICKS: usize = 6;

/// Fraction of the visible width moved by one pan step.
pub const PAN_STEP: f64 = 0.1;
pub const ZOOM_FACTOR: f64 = 1.2;
pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 10.0;
