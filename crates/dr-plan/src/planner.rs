//! Planning trait and the default Dijkstra implementation.
//!
//! # Pluggability
//!
//! `dr-sim` calls planning via the [`Planner`] trait, so applications can
//! swap in custom implementations (A*, bidirectional search) without touching
//! the engine core.  The default [`DijkstraPlanner`] is sufficient for the
//! node counts this engine targets.
//!
//! # Complexity
//!
//! The selection loop scans all nodes, giving O(n²) per single-source run —
//! deliberately simple, with no priority-queue indirection.  At editor-scale
//! graphs (tens of nodes) the quadratic scan is faster than maintaining a
//! heap, and scanning ids in ascending order makes tie-breaking
//! deterministic.

use dr_core::NodeId;
use dr_graph::Graph;

use crate::route::Route;
use crate::{PlanError, PlanResult};

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// The shortest-path tree of one single-source Dijkstra run.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// `dist[v]` = length of the shortest path from the source to `v`, or
    /// `f64::INFINITY` if `v` is unreachable.
    pub dist: Vec<f64>,

    /// `prev[v]` = predecessor of `v` on its shortest path, or
    /// `NodeId::INVALID` for the source and unreached nodes.
    pub prev: Vec<NodeId>,
}

impl ShortestPaths {
    /// `true` if `target` was reached from the source.
    #[inline]
    pub fn reached(&self, target: NodeId) -> bool {
        self.dist
            .get(target.index())
            .is_some_and(|d| d.is_finite())
    }
}

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable route planner.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a planner can be shared by
/// whatever drives the engine.
pub trait Planner: Send + Sync {
    /// Plan a route visiting `destinations` in order, starting at `src`.
    ///
    /// An empty destination list yields the degenerate single-node route at
    /// `src`.  Fails with [`PlanError::Unreachable`] if any leg target cannot
    /// be reached — no partial route is returned.
    fn plan_route(
        &self,
        graph: &Graph,
        src: NodeId,
        destinations: &[NodeId],
    ) -> PlanResult<Route>;
}

// ── DijkstraPlanner ───────────────────────────────────────────────────────────

/// Standard O(n²) Dijkstra over the adjacency store.
pub struct DijkstraPlanner;

impl DijkstraPlanner {
    /// Run single-source Dijkstra from `src`.
    ///
    /// Fails with `GraphError::UnknownNode` (wrapped) if `src` is not live.
    /// Negative weights cannot occur: `Graph::add_edge` rejects them.
    pub fn shortest_paths(graph: &Graph, src: NodeId) -> PlanResult<ShortestPaths> {
        graph.neighbors(src)?; // validates src before any allocation

        let n = graph.node_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev = vec![NodeId::INVALID; n];
        let mut visited = vec![false; n];
        dist[src.index()] = 0.0;

        loop {
            // Unvisited node with minimum finite tentative distance.
            // Ascending id scan → deterministic tie-breaking.
            let mut u: Option<usize> = None;
            let mut best = f64::INFINITY;
            for (i, &d) in dist.iter().enumerate() {
                if !visited[i] && d < best {
                    u = Some(i);
                    best = d;
                }
            }
            let Some(u) = u else {
                break; // no unvisited node has finite distance
            };
            visited[u] = true;

            for (&v, &w) in graph.neighbors(NodeId(u as u32))? {
                if visited[v.index()] {
                    continue;
                }
                let candidate = dist[u] + w;
                if candidate < dist[v.index()] {
                    dist[v.index()] = candidate;
                    prev[v.index()] = NodeId(u as u32);
                }
            }
        }

        Ok(ShortestPaths { dist, prev })
    }

    /// Reconstruct one leg's node sequence by walking `prev` backwards from
    /// `target` to `leg_start`, then reversing.
    fn reconstruct_leg(
        paths: &ShortestPaths,
        leg_start: NodeId,
        target: NodeId,
    ) -> Vec<NodeId> {
        let mut leg = vec![target];
        let mut cur = target;
        while cur != leg_start {
            cur = paths.prev[cur.index()];
            debug_assert_ne!(cur, NodeId::INVALID, "reached() must be checked first");
            leg.push(cur);
        }
        leg.reverse();
        leg
    }
}

impl Planner for DijkstraPlanner {
    fn plan_route(
        &self,
        graph: &Graph,
        src: NodeId,
        destinations: &[NodeId],
    ) -> PlanResult<Route> {
        graph.neighbors(src)?;

        let mut nodes = vec![src];
        let mut total_distance = 0.0;
        let mut leg_start = src;

        for &target in destinations {
            let paths = Self::shortest_paths(graph, leg_start)?;
            if !paths.reached(target) {
                return Err(PlanError::Unreachable {
                    target,
                    from: leg_start,
                });
            }

            // A destination equal to its own leg start yields a single-node
            // leg (distance 0) — tolerated, not an error.
            let leg = Self::reconstruct_leg(&paths, leg_start, target);
            debug_assert_eq!(leg[0], leg_start);

            // The junction node is already the tail of `nodes`; append the
            // rest so it appears exactly once in the stitched route.
            nodes.extend_from_slice(&leg[1..]);
            total_distance += paths.dist[target.index()];
            leg_start = target;
        }

        Ok(Route {
            nodes,
            total_distance,
        })
    }
}
