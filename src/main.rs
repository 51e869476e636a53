use std::error::Error;

use polyview::{
    config::{INPUT_PATH, LOG_LEVEL},
    debug::{item, STYLE_PATH},
    emit_info, info_label, read_coordinates, viewer, Figure, PlotErr, Rect,
    Summary,
};

pub fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(LOG_LEVEL)
        // stdout is reserved for the summary
        .with_writer(std::io::stderr)
        .init();

    emit_info!(sty:STYLE_PATH, fmt:"{}" | INPUT_PATH);
    let coords = read_coordinates(INPUT_PATH)?;

    let summary = Summary::of(&coords).ok_or(PlotErr::NoVertices)?;
    println!("{summary}");

    let figure = Figure::polygon(&coords, &Rect::REFERENCE)?;
    tracing::info!(
        "{} {} {}",
        info_label!("figure"),
        item("vertices", coords.len()),
        item("series", figure.series.len())
    );
    viewer::show(&figure)?;
    Ok(())
}
