//! Integration-style tests driving the whole plan / animate / disrupt cycle.

use dr_core::{NodeId, Point};
use dr_fault::EdgeFault;
use dr_motion::{MotionUpdate, TickOutcome};
use dr_plan::{PlanError, Route};

use crate::{EngineConfig, EngineError, EngineObserver, NoopObserver, RoutingEngine};

fn n(id: u32) -> NodeId {
    NodeId(id)
}

/// Engine over the 4-node example graph: 0-1 (4), 1-2 (1), 0-2 (10),
/// 2-3 (2), plus redundant bypasses 1-3 (9) and 0-3 (20) so the graph
/// survives any single edge fault.
fn example_engine(seed: u64) -> RoutingEngine {
    let mut engine = RoutingEngine::new(4, EngineConfig { seed, base_ticks: 3, ..Default::default() }).unwrap();
    engine.add_edge(n(0), n(1), 4.0).unwrap();
    engine.add_edge(n(1), n(2), 1.0).unwrap();
    engine.add_edge(n(0), n(2), 10.0).unwrap();
    engine.add_edge(n(2), n(3), 2.0).unwrap();
    engine.add_edge(n(1), n(3), 9.0).unwrap();
    engine.add_edge(n(0), n(3), 20.0).unwrap();
    engine
}

fn square_positions() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ]
}

/// Records every observer callback for later assertions.
#[derive(Default)]
struct Trace {
    routes: Vec<Route>,
    updates: Vec<MotionUpdate>,
    completed: Vec<MotionUpdate>,
    faults: Vec<EdgeFault>,
}

impl EngineObserver for Trace {
    fn on_route(&mut self, route: &Route) {
        self.routes.push(route.clone());
    }
    fn on_update(&mut self, update: &MotionUpdate) {
        self.updates.push(*update);
    }
    fn on_completed(&mut self, update: &MotionUpdate) {
        self.completed.push(*update);
    }
    fn on_fault(&mut self, fault: &EdgeFault) {
        self.faults.push(*fault);
    }
}

// ── Planning through the facade ───────────────────────────────────────────────

mod planning {
    use super::*;

    #[test]
    fn plan_stores_the_route_and_reports_it() {
        let mut engine = example_engine(42);
        let mut trace = Trace::default();

        let route = engine.plan(n(0), &[n(3)], &mut trace).unwrap();
        assert_eq!(route.nodes, vec![n(0), n(1), n(2), n(3)]);
        assert_eq!(route.total_distance, 7.0);

        assert_eq!(trace.routes.len(), 1);
        assert_eq!(engine.active_route().unwrap().nodes, vec![n(0), n(1), n(2), n(3)]);
        let plan = engine.active_plan().unwrap();
        assert_eq!(plan.source, n(0));
        assert_eq!(plan.waypoints, vec![n(3)]);
    }

    #[test]
    fn waypoint_chain_passes_through_in_order() {
        let mut engine = example_engine(42);
        let route = engine.plan(n(0), &[n(3), n(1)], &mut NoopObserver).unwrap();
        // 0→3 via 1,2 then 3→1 via 2; the junction node 3 appears once.
        assert_eq!(route.nodes, vec![n(0), n(1), n(2), n(3), n(2), n(1)]);
        assert_eq!(route.total_distance, 10.0);
    }

    #[test]
    fn replanning_supersedes_route_and_motion() {
        let positions = square_positions();
        let mut engine = example_engine(42);
        engine.plan(n(0), &[n(3)], &mut NoopObserver).unwrap();
        engine.start_motion(1.0, &positions).unwrap();
        assert!(engine.is_animating());

        engine.plan(n(0), &[n(1)], &mut NoopObserver).unwrap();
        assert!(!engine.is_animating());
        assert_eq!(engine.active_route().unwrap().nodes, vec![n(0), n(1)]);
    }

    #[test]
    fn unreachable_target_surfaces_transparently() {
        let mut engine = RoutingEngine::new(3, EngineConfig::default()).unwrap();
        engine.add_edge(n(0), n(1), 1.0).unwrap(); // node 2 isolated

        let err = engine.plan(n(0), &[n(2)], &mut NoopObserver).unwrap_err();
        assert_eq!(
            err,
            EngineError::Plan(PlanError::Unreachable { target: n(2), from: n(0) })
        );
        assert!(engine.active_route().is_none());
    }
}

// ── Motion through the facade ─────────────────────────────────────────────────

mod motion {
    use super::*;

    #[test]
    fn start_motion_requires_a_plan() {
        let positions = square_positions();
        let mut engine = example_engine(42);
        assert_eq!(
            engine.start_motion(1.0, &positions).unwrap_err(),
            EngineError::NoActivePlan
        );
    }

    #[test]
    fn run_motion_walks_the_route_and_completes_once() {
        let positions = square_positions();
        let mut engine = example_engine(42);
        engine.plan(n(0), &[n(3)], &mut NoopObserver).unwrap();

        let mut trace = Trace::default();
        engine.run_motion(1.0, &positions, &mut trace).unwrap();

        // 3 legs at 3 ticks each: the final tick reports Completed, the
        // other 8 report Moving.
        assert_eq!(trace.updates.len(), 8);
        assert_eq!(trace.completed.len(), 1);
        assert_eq!(trace.completed[0].position, positions[3]);
        assert!(!engine.is_animating());
    }

    #[test]
    fn ticks_after_completion_stay_silent() {
        let positions = square_positions();
        let mut engine = example_engine(42);
        engine.plan(n(0), &[n(1)], &mut NoopObserver).unwrap();
        engine.run_motion(1.0, &positions, &mut NoopObserver).unwrap();

        let mut trace = Trace::default();
        assert_eq!(engine.tick(&positions, &mut trace), TickOutcome::Idle);
        assert!(trace.updates.is_empty() && trace.completed.is_empty());
    }
}

// ── Fault / replan cycle ──────────────────────────────────────────────────────

mod faults {
    use super::*;

    #[test]
    fn inject_requires_a_plan() {
        let mut engine = example_engine(42);
        assert_eq!(
            engine.inject_fault(&mut NoopObserver).unwrap_err(),
            EngineError::NoActivePlan
        );
    }

    #[test]
    fn fault_breaks_an_on_route_edge_and_reroutes() {
        let positions = square_positions();
        let mut engine = example_engine(42);
        engine.plan(n(0), &[n(3)], &mut NoopObserver).unwrap();
        let old_route = engine.active_route().unwrap().clone();
        engine.start_motion(1.0, &positions).unwrap();

        let mut trace = Trace::default();
        let fault = engine.inject_fault(&mut trace).unwrap();

        // The broken edge was a segment of the superseded route.
        assert!(old_route.segments().any(|(u, v)| (u, v) == (fault.from, fault.to)));
        assert_eq!(trace.faults, vec![fault]);

        // A fresh route is stored, the old one is gone, motion stopped.
        assert_eq!(trace.routes.len(), 1);
        let new_route = engine.active_route().unwrap();
        assert!(fault.removed);
        assert!(
            !new_route
                .segments()
                .any(|(u, v)| (u, v) == (fault.from, fault.to) || (v, u) == (fault.from, fault.to)),
            "reroute {new_route} reuses the broken edge {fault:?}"
        );
        assert!(!engine.is_animating());

        // The replanned chain still starts and ends where the plan said.
        assert_eq!(new_route.source(), n(0));
        assert_eq!(new_route.target(), n(3));
    }

    #[test]
    fn unreachable_after_fault_clears_the_plan() {
        let mut engine = RoutingEngine::new(2, EngineConfig::default()).unwrap();
        engine.add_edge(n(0), n(1), 1.0).unwrap(); // the only edge
        engine.plan(n(0), &[n(1)], &mut NoopObserver).unwrap();

        let err = engine.inject_fault(&mut NoopObserver).unwrap_err();
        assert_eq!(
            err,
            EngineError::Plan(PlanError::Unreachable { target: n(1), from: n(0) })
        );
        assert!(engine.active_route().is_none());
        // A second injection has nothing to work on.
        assert_eq!(
            engine.inject_fault(&mut NoopObserver).unwrap_err(),
            EngineError::NoActivePlan
        );
    }

    #[test]
    fn fault_choice_replays_per_seed() {
        let mut a = example_engine(7);
        let mut b = example_engine(7);
        a.plan(n(0), &[n(3)], &mut NoopObserver).unwrap();
        b.plan(n(0), &[n(3)], &mut NoopObserver).unwrap();

        let fa = a.inject_fault(&mut NoopObserver).unwrap();
        let fb = b.inject_fault(&mut NoopObserver).unwrap();
        assert_eq!(fa, fb);
        assert_eq!(a.active_route(), b.active_route());
    }
}

// ── Graph lifecycle through the facade ────────────────────────────────────────

mod lifecycle {
    use super::*;

    #[test]
    fn generated_graph_is_plannable_between_any_nodes() {
        let mut engine = RoutingEngine::new(8, EngineConfig { seed: 3, ..Default::default() }).unwrap();
        engine.generate_graph().unwrap();
        // Connected by construction: the far corner is always reachable.
        let route = engine.plan(n(0), &[n(7)], &mut NoopObserver).unwrap();
        assert_eq!(route.target(), n(7));
    }

    #[test]
    fn reset_drops_plan_and_motion() {
        let positions = square_positions();
        let mut engine = example_engine(42);
        engine.plan(n(0), &[n(3)], &mut NoopObserver).unwrap();
        engine.start_motion(1.0, &positions).unwrap();

        engine.reset(6).unwrap();
        assert_eq!(engine.graph().node_count(), 6);
        assert_eq!(engine.graph().edge_count(), 0);
        assert!(engine.active_route().is_none());
        assert!(!engine.is_animating());
    }

    #[test]
    fn directed_config_adds_single_arcs() {
        let config = EngineConfig { directed: true, ..Default::default() };
        let mut engine = RoutingEngine::new(3, config).unwrap();
        engine.add_edge(n(0), n(1), 2.0).unwrap();

        assert!(engine.graph().has_edge(n(0), n(1)));
        assert!(!engine.graph().has_edge(n(1), n(0)));

        // Planning honours the one-way arc.
        assert!(engine.plan(n(0), &[n(1)], &mut NoopObserver).is_ok());
        assert!(engine.plan(n(1), &[n(0)], &mut NoopObserver).is_err());
    }
}
