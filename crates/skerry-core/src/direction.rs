//! Compass directions for boat movement.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::Point;

/// One of the eight compass directions.
///
/// North points towards the top of the chart, so its delta has a negative
/// y component in screen coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// The coordinate delta of a single step in this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::N => Point::new(0, -1),
            Self::NE => Point::new(1, -1),
            Self::E => Point::new(1, 0),
            Self::SE => Point::new(1, 1),
            Self::S => Point::new(0, 1),
            Self::SW => Point::new(-1, 1),
            Self::W => Point::new(-1, 0),
            Self::NW => Point::new(-1, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        };
        f.write_str(s)
    }
}

impl FromStr for Direction {
    type Err = GridError;

    /// Parse one of the eight uppercase compass symbols. Anything else is
    /// a caller error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Self::N),
            "NE" => Ok(Self::NE),
            "E" => Ok(Self::E),
            "SE" => Ok(Self::SE),
            "S" => Ok(Self::S),
            "SW" => Ok(Self::SW),
            "W" => Ok(Self::W),
            "NW" => Ok(Self::NW),
            other => Err(GridError::UnknownDirection(other.to_string())),
        }
    }
}
