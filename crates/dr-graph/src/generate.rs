//! Seeded random graph generation.
//!
//! Builds the "create random" graphs the editor offers: a random spanning
//! tree guarantees connectivity, then extra edges are sprinkled in with a
//! fixed probability.  Driven by [`EngineRng`] so demos and tests get the
//! same graph for the same seed.

use dr_core::{EngineRng, NodeId};

use crate::{Graph, GraphResult};

/// Probability of each extra (non-tree) edge being added.
const EXTRA_EDGE_PROB: f64 = 0.25;

/// Generate a connected graph with `n` nodes and uniform random weights in
/// `1.0..=10.0` (rounded to one decimal, matching hand-entered weights).
///
/// Node `i > 0` is attached to a uniformly chosen earlier node, which yields
/// a random spanning tree; every unordered pair then gets an extra edge with
/// probability 0.25.  With `directed == false` all edges are symmetric, so
/// the result is connected; with `directed == true` the tree arcs run from
/// the later node to the earlier one (as entered), so reachability is not
/// guaranteed in both directions.
pub fn random_connected(n: usize, directed: bool, rng: &mut EngineRng) -> GraphResult<Graph> {
    let mut graph = Graph::new(n)?;

    // Spanning tree: attach each node to a random predecessor.
    for i in 1..n {
        let j = rng.gen_range(0..i);
        let w = random_weight(rng);
        graph.add_edge(NodeId(i as u32), NodeId(j as u32), w, directed)?;
    }

    // Extra edges, skipping pairs the tree already connected.
    for u in 0..n {
        for v in (u + 1)..n {
            let (u, v) = (NodeId(u as u32), NodeId(v as u32));
            if graph.has_edge(u, v) {
                continue;
            }
            if rng.gen_bool(EXTRA_EDGE_PROB) {
                graph.add_edge(u, v, random_weight(rng), directed)?;
            }
        }
    }

    Ok(graph)
}

fn random_weight(rng: &mut EngineRng) -> f64 {
    let w: f64 = rng.gen_range(1.0..10.0);
    (w * 10.0).round() / 10.0
}
