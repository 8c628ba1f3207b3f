//! The node-position seam between the engine and the presentation layer.

use dr_core::{NodeId, Point};

/// Read-only lookup from a node id to its canvas position.
///
/// The presentation layer owns positions (it lays nodes out and lets the
/// user drag them); the scheduler only reads them, once per leg boundary.
/// Lookups must cover every node of the route being animated.
pub trait PositionLookup {
    fn position(&self, node: NodeId) -> Point;
}

/// Dense position table indexed by node id.
///
/// # Panics
///
/// Panics if `node` is outside the slice — the caller promised positions
/// for every route node.
impl PositionLookup for [Point] {
    #[inline]
    fn position(&self, node: NodeId) -> Point {
        self[node.index()]
    }
}

impl PositionLookup for Vec<Point> {
    #[inline]
    fn position(&self, node: NodeId) -> Point {
        self.as_slice().position(node)
    }
}
