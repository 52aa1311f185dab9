//! A single chart cell with its search-cost state.

use crate::geom::{Point, octile};

/// Sentinel cost meaning "not reached by the current search".
pub const UNREACHABLE: i32 = i32::MAX;

/// A grid cell: navigability, a fixed position, and the mutable cost
/// state written by the path search.
///
/// The position never changes after construction. `gcost`, `hcost` and
/// `parent` are scratch state owned by whichever search last ran; they
/// start at their sentinel values and are restored to them by
/// [`reset`](Node::reset) before every search.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    navigable: bool,
    pos: Point,
    /// Accumulated path cost from the search start.
    pub gcost: i32,
    /// Ordering heuristic (distance to the expanding cell).
    pub hcost: i32,
    /// Coordinate of the cell this one was best reached from. A
    /// back-reference only; the grid's cell table owns all nodes.
    pub parent: Option<Point>,
}

impl Node {
    /// Create a node at a fixed position with sentinel costs.
    pub fn new(navigable: bool, pos: Point) -> Self {
        Self {
            navigable,
            pos,
            gcost: UNREACHABLE,
            hcost: UNREACHABLE,
            parent: None,
        }
    }

    /// Whether the boat may occupy or traverse this cell.
    #[inline]
    pub fn navigable(&self) -> bool {
        self.navigable
    }

    /// The cell's grid coordinate.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Priority key for expansion order.
    ///
    /// Saturating so that an unreached node stays at the sentinel
    /// instead of wrapping around.
    #[inline]
    pub fn fcost(&self) -> i32 {
        self.gcost.saturating_add(self.hcost)
    }

    /// Octile distance to another cell.
    #[inline]
    pub fn distance(&self, other: &Node) -> i32 {
        octile(self.pos, other.pos)
    }

    /// Restore cost fields and the parent link to their initial values.
    pub fn reset(&mut self) {
        self.gcost = UNREACHABLE;
        self.hcost = UNREACHABLE;
        self.parent = None;
    }
}

/// Two nodes are the same cell iff they agree on navigability and on
/// both coordinates. Cost state is deliberately excluded.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.navigable == other.navigable
            && self.pos.x == other.pos.x
            && self.pos.y == other.pos.y
    }
}

impl Eq for Node {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_has_sentinel_costs() {
        let n = Node::new(true, Point::new(2, 3));
        assert_eq!(n.gcost, UNREACHABLE);
        assert_eq!(n.hcost, UNREACHABLE);
        assert_eq!(n.parent, None);
        assert_eq!(n.pos(), Point::new(2, 3));
        assert!(n.navigable());
    }

    #[test]
    fn fcost_saturates_at_sentinel() {
        let n = Node::new(true, Point::ZERO);
        assert_eq!(n.fcost(), UNREACHABLE);
    }

    #[test]
    fn fcost_sums_finite_costs() {
        let mut n = Node::new(true, Point::ZERO);
        n.gcost = 24;
        n.hcost = 10;
        assert_eq!(n.fcost(), 34);
    }

    #[test]
    fn distance_matches_octile() {
        let a = Node::new(true, Point::new(0, 0));
        let b = Node::new(true, Point::new(3, 2));
        assert_eq!(a.distance(&b), 38);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn equality_compares_both_axes() {
        let a = Node::new(true, Point::new(1, 2));
        // Same x, different y: must not compare equal.
        let b = Node::new(true, Point::new(1, 5));
        assert_ne!(a, b);
        // Different x, same y.
        let c = Node::new(true, Point::new(4, 2));
        assert_ne!(a, c);
        assert_eq!(a, Node::new(true, Point::new(1, 2)));
    }

    #[test]
    fn equality_includes_navigability() {
        let water = Node::new(true, Point::new(1, 1));
        let island = Node::new(false, Point::new(1, 1));
        assert_ne!(water, island);
    }

    #[test]
    fn equality_ignores_cost_state() {
        let mut a = Node::new(true, Point::new(1, 1));
        let b = Node::new(true, Point::new(1, 1));
        a.gcost = 0;
        a.hcost = 12;
        a.parent = Some(Point::ZERO);
        assert_eq!(a, b);
    }

    #[test]
    fn reset_restores_sentinels() {
        let mut n = Node::new(true, Point::ZERO);
        n.gcost = 3;
        n.hcost = 4;
        n.parent = Some(Point::new(1, 1));
        n.reset();
        assert_eq!(n.gcost, UNREACHABLE);
        assert_eq!(n.hcost, UNREACHABLE);
        assert_eq!(n.parent, None);
    }
}
