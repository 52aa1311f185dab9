//! The informed best-first search over a chart's cell table.

use std::collections::BinaryHeap;

use log::{debug, trace};
use skerry_core::{Grid, Point, octile};

/// Reference into the open set, ordered by `f` then `h` for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    pos: Point,
    f: i32,
    h: i32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first,
        // breaking ties by smallest h.
        other.f.cmp(&self.f).then(other.h.cmp(&self.h))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search state, reusable across queries.
///
/// `Search` owns the open-set heap, the closed bitmap and a neighbor
/// scratch buffer, so repeated searches on same-sized charts incur no
/// allocations after the first use. Cost fields and parent links are
/// written into the chart's own cells; the chart is reset before every
/// search, so earlier results never bias a later one.
pub struct Search {
    open: BinaryHeap<OpenEntry>,
    closed: Vec<bool>,
    nbuf: Vec<Point>,
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

impl Search {
    /// Create a new search with empty scratch state.
    pub fn new() -> Self {
        Self {
            open: BinaryHeap::new(),
            closed: Vec::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Search for the cheapest 8-connected path from `start` to `target`.
    ///
    /// On success the chart's cells hold the parent-linked search tree
    /// and the target's `gcost` is the cost of the found path; follow it
    /// with [`retrace`](crate::retrace). Returns `false` (an explicit
    /// no-path outcome, never a hang) when the open set drains before
    /// the target is reached, or when either endpoint is off the chart.
    pub fn find_path(&mut self, grid: &mut Grid, start: Point, target: Point) -> bool {
        if !grid.contains(start) || !grid.contains(target) {
            debug!("search endpoints off the chart: {start} -> {target}");
            return false;
        }

        grid.reset_costs();
        self.open.clear();
        self.closed.clear();
        self.closed
            .resize((grid.width() * grid.height()) as usize, false);

        let width = grid.width();
        let flat = |p: Point| (p.y * width + p.x) as usize;

        let Some(start_node) = grid.at_mut(start) else {
            return false;
        };
        start_node.gcost = 0;
        start_node.hcost = 0;
        self.open.push(OpenEntry {
            pos: start,
            f: 0,
            h: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(current) = self.open.pop() else {
                break false;
            };
            let ci = flat(current.pos);

            // A closed cell's entries are stale; expansion happens once.
            if self.closed[ci] {
                continue;
            }
            self.closed[ci] = true;

            if grid.at(current.pos) == grid.at(target) {
                break true;
            }

            let Some(node) = grid.at(current.pos) else {
                continue;
            };
            let current_g = node.gcost;
            trace!("expanding {} (g={current_g})", current.pos);

            grid.neighborhood(current.pos, &mut nbuf);
            for &np in nbuf.iter() {
                if self.closed[flat(np)] {
                    continue;
                }
                let Some(neighbor) = grid.at_mut(np) else {
                    continue;
                };
                if !neighbor.navigable() {
                    continue;
                }
                let step = octile(current.pos, np);
                let tentative = current_g + step;
                if tentative < neighbor.gcost {
                    neighbor.gcost = tentative;
                    // The ordering heuristic is the distance to the
                    // expanding cell, i.e. the step just taken.
                    neighbor.hcost = step;
                    neighbor.parent = Some(current.pos);
                    self.open.push(OpenEntry {
                        pos: np,
                        f: neighbor.fcost(),
                        h: step,
                    });
                }
            }
        };

        self.nbuf = nbuf;
        if found {
            debug!("path found: {start} -> {target}");
        } else {
            debug!("no path: {start} -> {target}");
        }
        found
    }
}
