//! Error type for chart construction and boat movement.

use std::fmt;
use std::io;

use crate::geom::Point;

/// Errors reported by grid construction, direction parsing and movement.
#[derive(Debug)]
pub enum GridError {
    /// The chart text contained no rows.
    Empty,
    /// Rows have inconsistent widths.
    InconsistentSize { row: usize, expected: usize, found: usize },
    /// A character outside the chart alphabet was found.
    InvalidMarker { ch: char, pos: Point },
    /// A required unique marker (boat or treasure) is absent.
    MissingMarker(char),
    /// A unique marker appeared more than once.
    DuplicateMarker(char),
    /// A direction string outside the eight compass symbols.
    UnknownDirection(String),
    /// The requested move leaves the chart or enters an island.
    IllegalMove { from: Point, to: Point },
    /// Reading a chart file failed.
    Io(io::Error),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "chart is empty"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "chart row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidMarker { ch, pos } => {
                write!(f, "invalid chart marker {ch:?} at {pos}")
            }
            Self::MissingMarker(ch) => write!(f, "chart has no {ch:?} marker"),
            Self::DuplicateMarker(ch) => {
                write!(f, "chart has more than one {ch:?} marker")
            }
            Self::UnknownDirection(s) => write!(f, "unknown direction {s:?}"),
            Self::IllegalMove { from, to } => {
                write!(f, "illegal move from {from} to {to}")
            }
            Self::Io(err) => write!(f, "reading chart: {err}"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GridError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_messages() {
        let e = GridError::IllegalMove {
            from: Point::new(0, 0),
            to: Point::new(0, -1),
        };
        assert_eq!(e.to_string(), "illegal move from (0, 0) to (0, -1)");
        assert_eq!(
            GridError::DuplicateMarker('B').to_string(),
            "chart has more than one 'B' marker"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        let e = GridError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(e.source().is_some());
    }
}
