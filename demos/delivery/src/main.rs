//! delivery — headless end-to-end demo of the routing engine.
//!
//! Generates a random connected city graph, plans a delivery run through two
//! waypoints, animates the vehicle tick by tick, then breaks an edge on the
//! live route and shows the reroute.  A GUI front end would do exactly this,
//! with the printlns replaced by canvas redraws.

use anyhow::Result;

use dr_core::{NodeId, Point};
use dr_fault::EdgeFault;
use dr_motion::MotionUpdate;
use dr_plan::Route;
use dr_sim::{EngineConfig, EngineObserver, RoutingEngine};

// ── Constants ─────────────────────────────────────────────────────────────────

const NODE_COUNT:  usize = 10;
const SEED:        u64   = 42;
const SPEED:       f64   = 5.0;  // 7 ticks per leg at the default base of 35
const CANVAS_SIZE: f32   = 700.0;

// ── Layout ────────────────────────────────────────────────────────────────────

/// Evenly spaced ring layout, the same arrangement a canvas front end uses.
fn ring_positions(n: usize) -> Vec<Point> {
    let center = CANVAS_SIZE / 2.0;
    let radius = CANVAS_SIZE / 2.0 - 60.0;
    (0..n)
        .map(|i| {
            let angle = 2.0 * std::f32::consts::PI * i as f32 / n as f32;
            Point::new(center + radius * angle.cos(), center + radius * angle.sin())
        })
        .collect()
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints route changes and a sampled position trace.
struct ConsoleObserver {
    ticks: usize,
}

impl EngineObserver for ConsoleObserver {
    fn on_route(&mut self, route: &Route) {
        println!("route: {route}");
    }

    fn on_update(&mut self, update: &MotionUpdate) {
        self.ticks += 1;
        if self.ticks % 7 == 0 {
            println!(
                "  tick {:>3}: leg {} at {} heading {:>6.1}°",
                self.ticks,
                update.leg_index,
                update.position,
                update.heading.to_degrees()
            );
        }
    }

    fn on_completed(&mut self, update: &MotionUpdate) {
        self.ticks += 1;
        println!("  arrived at {} after {} ticks", update.position, self.ticks);
    }

    fn on_fault(&mut self, fault: &EdgeFault) {
        if fault.removed {
            println!("fault: edge {} - {} failed", fault.from, fault.to);
        } else {
            println!("fault: edge {} - {} was already down", fault.from, fault.to);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== delivery — dynamic routing demo ===");
    println!("Nodes: {NODE_COUNT}  |  Seed: {SEED}  |  Speed: {SPEED}");
    println!();

    // 1. Random connected city, nodes laid out on a ring.
    let config = EngineConfig { seed: SEED, ..Default::default() };
    let mut engine = RoutingEngine::new(NODE_COUNT, config)?;
    engine.generate_graph()?;
    let positions = ring_positions(NODE_COUNT);
    println!(
        "Graph: {} nodes, {} edges",
        engine.graph().node_count(),
        engine.graph().edge_count()
    );

    // 2. Plan a run from the depot through two delivery stops.
    let depot = NodeId(0);
    let stops = [NodeId(6), NodeId(3)];
    let mut observer = ConsoleObserver { ticks: 0 };
    engine.plan(depot, &stops, &mut observer)?;

    // 3. Drive the first route to completion.
    engine.run_motion(SPEED, &positions, &mut observer)?;
    println!();

    // 4. Plan again, then break a live edge mid-delivery.
    engine.plan(depot, &stops, &mut observer)?;
    engine.start_motion(SPEED, &positions)?;
    for _ in 0..10 {
        engine.tick(&positions, &mut observer);
    }
    match engine.inject_fault(&mut observer) {
        Ok(_) => {
            // 5. Restart along the reroute.
            engine.run_motion(SPEED, &positions, &mut observer)?;
        }
        Err(err) => println!("no way through after the fault: {err}"),
    }

    Ok(())
}
