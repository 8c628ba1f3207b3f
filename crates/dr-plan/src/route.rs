//! The planned route: an ordered node sequence plus its total distance.

use dr_core::NodeId;

/// The result of a planning query.
///
/// Invariant: `nodes` is never empty, and at plan time every consecutive
/// pair was connected by a live edge.  A single-node route is degenerate
/// (source equals the only destination) and carries distance `0.0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Nodes to visit in order, from source to final destination.
    pub nodes: Vec<NodeId>,

    /// Sum of the per-leg shortest distances.
    pub total_distance: f64,
}

impl Route {
    /// Number of nodes in the sequence (≥ 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A route always has at least its source node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `true` if the route has no edges to traverse (single node).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.nodes.len() < 2
    }

    /// First node of the sequence.
    #[inline]
    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    /// Last node of the sequence.
    #[inline]
    pub fn target(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Iterator over the consecutive `(from, to)` pairs the route traverses.
    pub fn segments(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for node in &self.nodes {
            if !first {
                write!(f, " → ")?;
            }
            write!(f, "{}", node.0)?;
            first = false;
        }
        write!(f, " (distance {:.2})", self.total_distance)
    }
}
