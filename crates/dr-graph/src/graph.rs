//! Weighted adjacency store.
//!
//! # Data layout
//!
//! One `BTreeMap<NodeId, f64>` per node, indexed by `NodeId`.  The node set
//! is always exactly `0..n-1`, so a plain `Vec` row per node beats a nested
//! hash map: row lookup is an index, and `BTreeMap` keeps neighbor iteration
//! in ascending id order, which makes planning results reproducible for the
//! same graph regardless of insertion order.
//!
//! # Directedness
//!
//! Edges are stored as directed arcs.  An undirected edge is the symmetric
//! pair of arcs `u→v` and `v→u` with equal weight; `add_edge`/`remove_edge`
//! maintain that symmetry when called with `directed = false`.

use std::collections::BTreeMap;

use dr_core::NodeId;

use crate::{GraphError, GraphResult};

/// Mutable weighted graph over the dense node set `{0, …, n-1}`.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    /// Outgoing arcs of each node, keyed by destination.  Indexed by `NodeId`.
    adjacency: Vec<BTreeMap<NodeId, f64>>,
}

impl Graph {
    /// Create a graph with `n` nodes and no edges.
    ///
    /// Fails with [`GraphError::InvalidNodeCount`] if `n < 1`.
    pub fn new(n: usize) -> GraphResult<Self> {
        let mut graph = Graph { adjacency: Vec::new() };
        graph.reset(n)?;
        Ok(graph)
    }

    /// Discard all nodes and edges and reinitialise `n` empty adjacency rows.
    ///
    /// Any previously planned route is invalidated by this call — callers
    /// must drop routes and cancel in-flight motion themselves.
    pub fn reset(&mut self, n: usize) -> GraphResult<()> {
        if n < 1 {
            return Err(GraphError::InvalidNodeCount(n));
        }
        self.adjacency.clear();
        self.adjacency.resize(n, BTreeMap::new());
        Ok(())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of live nodes (`n`).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored directed arcs.  An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|row| row.len()).sum()
    }

    /// `true` if `id` is inside the current node set.
    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.adjacency.len()
    }

    // ── Edge mutation ─────────────────────────────────────────────────────

    /// Set the weight of edge `u → v` (and `v → u` when `directed == false`),
    /// overwriting any prior weight for the pair.
    ///
    /// # Errors
    ///
    /// - [`GraphError::SelfLoop`] if `u == v`;
    /// - [`GraphError::UnknownNode`] if either endpoint is not live;
    /// - [`GraphError::InvalidWeight`] if `w` is negative or non-finite —
    ///   the planner assumes non-negative weights, so they are rejected at
    ///   the door instead of silently producing wrong routes.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, w: f64, directed: bool) -> GraphResult<()> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        self.check_node(u)?;
        self.check_node(v)?;
        if !w.is_finite() || w < 0.0 {
            return Err(GraphError::InvalidWeight(w));
        }

        self.adjacency[u.index()].insert(v, w);
        if !directed {
            self.adjacency[v.index()].insert(u, w);
        }
        Ok(())
    }

    /// Delete edge `u → v` (and `v → u` when `directed == false`) if present.
    ///
    /// Removal is idempotent: a missing edge is not an error.  Returns `true`
    /// if at least one arc was actually removed — fault injection uses this
    /// to report whether anything changed.  Endpoints outside the node set
    /// trivially have no edge and return `false`.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId, directed: bool) -> bool {
        let mut removed = false;
        if let Some(row) = self.adjacency.get_mut(u.index()) {
            removed |= row.remove(&v).is_some();
        }
        if !directed
            && let Some(row) = self.adjacency.get_mut(v.index())
        {
            removed |= row.remove(&u).is_some();
        }
        removed
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Read-only view of `u`'s outgoing arcs, keyed by destination.
    ///
    /// Fails with [`GraphError::UnknownNode`] if `u` is not live.
    pub fn neighbors(&self, u: NodeId) -> GraphResult<&BTreeMap<NodeId, f64>> {
        self.adjacency
            .get(u.index())
            .ok_or(GraphError::UnknownNode(u))
    }

    /// Weight of arc `u → v`, or `None` if absent (or `u` is not live).
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.adjacency.get(u.index())?.get(&v).copied()
    }

    /// `true` if arc `u → v` exists.
    #[inline]
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.weight(u, v).is_some()
    }

    /// Iterator over every stored arc as `(from, to, weight)`, in ascending
    /// `(from, to)` order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, row)| {
            row.iter().map(move |(&v, &w)| (NodeId(u as u32), v, w))
        })
    }

    fn check_node(&self, id: NodeId) -> GraphResult<()> {
        if self.contains_node(id) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id))
        }
    }
}
