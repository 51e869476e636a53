pub mod config;
pub mod coords;
pub mod debug;
pub mod figure;
pub mod point;
pub mod reader;
pub mod rect;
pub mod summary;
pub mod viewer;

pub use coords::Coords;
pub use figure::{Figure, PlotErr};
pub use point::Point;
pub use reader::{parse_coordinates, read_coordinates, ReadErr};
pub use rect::Rect;
pub use summary::Summary;
