//! The navigation chart: cell table, text overlay and the two entities.
//!
//! A [`Grid`] is parsed once from rows of marker characters and then holds
//! two synchronized views of the same chart: the [`Node`] table consulted
//! by the path search, and the character overlay used for rendering. Both
//! are only ever mutated together, through [`Grid::move_boat`] and
//! [`Grid::mark`].

use std::fmt;
use std::fs;
use std::path::Path;

use crate::direction::Direction;
use crate::error::GridError;
use crate::geom::{Point, octile};
use crate::node::Node;

/// Navigable open water.
pub const WATER: char = '.';
/// Non-navigable island cell.
pub const ISLAND: char = '+';
/// The boat's current position (exactly one per chart).
pub const BOAT: char = 'B';
/// The treasure's fixed position (exactly one per chart).
pub const TREASURE: char = 'T';
/// Overlay marker for intermediate cells of a plotted path.
pub const PATH_MARK: char = '*';

/// Scan rows top to bottom, left to right, for the first occurrence of a
/// marker character.
pub fn locate_marker<S: AsRef<str>>(rows: &[S], marker: char) -> Option<Point> {
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.as_ref().chars().enumerate() {
            if ch == marker {
                return Some(Point::new(x as i32, y as i32));
            }
        }
    }
    None
}

/// A rectangular chart of water and islands with a boat and a treasure.
#[derive(Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    /// Row-major cell table; `nodes[y * width + x]` has position (x, y).
    nodes: Vec<Node>,
    /// One row of characters per y, kept in lockstep with `nodes`.
    overlay: Vec<Vec<char>>,
    boat: Point,
    treasure: Point,
}

impl Grid {
    /// Parse a chart from newline-separated text. Blank lines are skipped.
    ///
    /// See [`from_rows`](Self::from_rows) for format requirements.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = s.lines().filter(|l| !l.is_empty()).collect();
        Self::from_rows(&rows)
    }

    /// Read a chart from a text file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Build a chart from rows of marker characters.
    ///
    /// Rows must be non-empty and of equal width, use only the chart
    /// alphabet (`.`, `+`, `B`, `T`), and contain exactly one boat and
    /// one treasure. Violations are construction failures.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        if rows.is_empty() || rows[0].as_ref().is_empty() {
            return Err(GridError::Empty);
        }
        let width = rows[0].as_ref().chars().count();

        let mut nodes = Vec::with_capacity(width * rows.len());
        let mut overlay = Vec::with_capacity(rows.len());
        let mut boats = 0usize;
        let mut treasures = 0usize;

        for (y, row) in rows.iter().enumerate() {
            let row: Vec<char> = row.as_ref().chars().collect();
            if row.len() != width {
                return Err(GridError::InconsistentSize {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &ch) in row.iter().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let navigable = match ch {
                    WATER => true,
                    ISLAND => false,
                    BOAT => {
                        boats += 1;
                        true
                    }
                    TREASURE => {
                        treasures += 1;
                        true
                    }
                    _ => return Err(GridError::InvalidMarker { ch, pos }),
                };
                nodes.push(Node::new(navigable, pos));
            }
            overlay.push(row);
        }

        match boats {
            0 => return Err(GridError::MissingMarker(BOAT)),
            1 => {}
            _ => return Err(GridError::DuplicateMarker(BOAT)),
        }
        match treasures {
            0 => return Err(GridError::MissingMarker(TREASURE)),
            1 => {}
            _ => return Err(GridError::DuplicateMarker(TREASURE)),
        }
        // Counted exactly one of each above.
        let boat = locate_marker(rows, BOAT).ok_or(GridError::MissingMarker(BOAT))?;
        let treasure =
            locate_marker(rows, TREASURE).ok_or(GridError::MissingMarker(TREASURE))?;

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            nodes,
            overlay,
            boat,
            treasure,
        })
    }

    /// Chart width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Chart height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether a point lies on the chart.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// The boat's current position. Always a navigable cell.
    #[inline]
    pub fn boat(&self) -> Point {
        self.boat
    }

    /// The treasure's position. Always a navigable cell.
    #[inline]
    pub fn treasure(&self) -> Point {
        self.treasure
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// The cell at a point, or `None` if off the chart.
    pub fn at(&self, p: Point) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// Mutable access to the cell at a point.
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Node> {
        self.idx(p).map(move |i| &mut self.nodes[i])
    }

    /// Whether the cell at `p` is on the chart and navigable.
    pub fn navigable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Node::navigable)
    }

    /// Append the up-to-8 in-bounds neighbors of `p` into `buf`.
    ///
    /// The buffer is cleared first. No navigability filtering happens
    /// here; the search decides which neighbors it may enter.
    pub fn neighborhood(&self, p: Point, buf: &mut Vec<Point>) {
        buf.clear();
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = p.shift(dx, dy);
                if self.contains(n) {
                    buf.push(n);
                }
            }
        }
    }

    /// Move the boat one step in a compass direction.
    ///
    /// Fails with [`GridError::IllegalMove`] if the target cell is off
    /// the chart or an island; the grid is left untouched. On success the
    /// boat marker and the vacated cell's character swap places in the
    /// overlay, so a cell the boat leaves reverts to its own marker.
    pub fn move_boat(&mut self, direction: Direction) -> Result<(), GridError> {
        let from = self.boat;
        let to = from + direction.delta();
        if !self.navigable(to) {
            return Err(GridError::IllegalMove { from, to });
        }
        let vacated = self.overlay[to.y as usize][to.x as usize];
        self.overlay[to.y as usize][to.x as usize] =
            self.overlay[from.y as usize][from.x as usize];
        self.overlay[from.y as usize][from.x as usize] = vacated;
        self.boat = to;
        Ok(())
    }

    /// Return the treasure if it lies strictly within `range` of the
    /// boat, by octile distance. Pure; mutates nothing.
    pub fn treasure_in_range(&self, range: i32) -> Option<Point> {
        if octile(self.boat, self.treasure) < range {
            Some(self.treasure)
        } else {
            None
        }
    }

    /// Restore every cell's cost state to its initial sentinel values.
    ///
    /// Must run before each search; stale costs from a previous search
    /// would otherwise bias the next one.
    pub fn reset_costs(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
    }

    /// Write a character into the overlay at an absolute coordinate.
    /// Off-chart points are ignored.
    pub fn mark(&mut self, p: Point, ch: char) {
        if self.contains(p) {
            self.overlay[p.y as usize][p.x as usize] = ch;
        }
    }

    /// The overlay character at a point.
    pub fn overlay_at(&self, p: Point) -> Option<char> {
        if !self.contains(p) {
            return None;
        }
        Some(self.overlay[p.y as usize][p.x as usize])
    }

    /// The overlay rows as strings, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.overlay.iter().map(|r| r.iter().collect()).collect()
    }
}

impl fmt::Display for Grid {
    /// Render the overlay as newline-joined rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.overlay.iter().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for &ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
