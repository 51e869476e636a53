use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    num::ParseIntError,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{coords::Coords, point::Point};

#[derive(Debug)]
pub enum ReadErr {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    FieldCount {
        line: usize,
        text: String,
    },
    BadInt {
        line: usize,
        field: String,
        source: ParseIntError,
    },
    Empty,
}

impl Display for ReadErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadErr::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            ReadErr::FieldCount { line, text } => write!(
                f,
                "line {line}: expected `<int>,<int>`, found {text:?}"
            ),
            ReadErr::BadInt { line, field, .. } => {
                write!(f, "line {line}: {field:?} is not an integer")
            }
            ReadErr::Empty => f.write_str("no coordinates in input"),
        }
    }
}

impl Error for ReadErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReadErr::Io { source, .. } => Some(source),
            ReadErr::BadInt { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn parse_field(line: usize, field: &str) -> Result<i64, ReadErr> {
    let field = field.trim();
    field.parse().map_err(|source| ReadErr::BadInt {
        line,
        field: field.to_string(),
        source,
    })
}

/// Parses one non-blank, already trimmed line.
fn parse_line(line: usize, text: &str) -> Result<Point, ReadErr> {
    let mut fields = text.split(',');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(x), Some(y), None) => {
            Ok(Point::new(parse_field(line, x)?, parse_field(line, y)?))
        }
        _ => Err(ReadErr::FieldCount {
            line,
            text: text.to_string(),
        }),
    }
}

/// Reads one `<int>,<int>` pair per line, skipping blank lines.
///
/// The first malformed line aborts the read.
pub fn parse_coordinates<R: BufRead>(reader: R) -> Result<Coords, ReadErr> {
    let mut coords = Coords::default();
    for (ix, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ReadErr::Io {
            path: PathBuf::new(),
            source,
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        coords.push(parse_line(ix + 1, text)?);
    }
    if coords.is_empty() {
        return Err(ReadErr::Empty);
    }
    debug!("parsed {} coordinates", coords.len());
    Ok(coords)
}

pub fn read_coordinates(path: impl AsRef<Path>) -> Result<Coords, ReadErr> {
    let path = path.as_ref();
    let io_err = |source| ReadErr::Io {
        path: path.to_path_buf(),
        source,
    };
    info!("reading coordinates from {}", path.display());
    let file = File::open(path).map_err(io_err)?;
    parse_coordinates(BufReader::new(file)).map_err(|err| match err {
        ReadErr::Io { source, .. } => io_err(source),
        err => err,
    })
}
