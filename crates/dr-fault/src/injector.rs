//! The fault injector: seeded random selection of an on-route edge.

use dr_core::{EngineRng, NodeId};
use dr_graph::Graph;
use dr_plan::Route;

use crate::{FaultError, FaultResult};

/// The edge a fault removed (or tried to remove).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeFault {
    pub from: NodeId,
    pub to: NodeId,

    /// `false` when the edge was already absent from the graph.  The caller
    /// should still replan: the endpoints may have been connected by an
    /// alternate edge all along.
    pub removed: bool,
}

/// Injects edge faults along a route, deterministically per seed.
pub struct FaultInjector {
    rng: EngineRng,
}

impl FaultInjector {
    /// Create an injector whose edge choices replay identically for the
    /// same seed and route sequence.
    pub fn new(seed: u64) -> Self {
        Self { rng: EngineRng::new(seed) }
    }

    /// Create an injector from an already-derived RNG stream.
    pub fn from_rng(rng: EngineRng) -> Self {
        Self { rng }
    }

    /// Remove one uniformly chosen edge of `route` from `graph`.
    ///
    /// `directed` must match how the edges were added so the mirror arc of
    /// an undirected edge is removed too.  Fails with
    /// [`FaultError::NoActiveRoute`] if the route has no edges (fewer than
    /// two nodes).  Removing an edge that is already gone is a no-op and is
    /// reported via [`EdgeFault::removed`].
    pub fn inject(
        &mut self,
        graph: &mut Graph,
        route: &Route,
        directed: bool,
    ) -> FaultResult<EdgeFault> {
        if route.len() < 2 {
            return Err(FaultError::NoActiveRoute);
        }

        let i = self.rng.gen_range(0..route.len() - 1);
        let from = route.nodes[i];
        let to = route.nodes[i + 1];
        let removed = graph.remove_edge(from, to, directed);

        Ok(EdgeFault { from, to, removed })
    }
}
