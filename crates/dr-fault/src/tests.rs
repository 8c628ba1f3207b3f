//! Unit tests for dr-fault.

use dr_core::NodeId;
use dr_graph::Graph;
use dr_plan::{DijkstraPlanner, PlanError, Planner, Route};

use crate::{EdgeFault, FaultError, FaultInjector};

fn n(id: u32) -> NodeId {
    NodeId(id)
}

/// Line graph 0-1-2-3 with unit weights plus a long bypass 0-3.
fn line_with_bypass() -> Graph {
    let mut g = Graph::new(4).unwrap();
    g.add_edge(n(0), n(1), 1.0, false).unwrap();
    g.add_edge(n(1), n(2), 1.0, false).unwrap();
    g.add_edge(n(2), n(3), 1.0, false).unwrap();
    g.add_edge(n(0), n(3), 50.0, false).unwrap();
    g
}

fn route_0_to_3(g: &Graph) -> Route {
    DijkstraPlanner.plan_route(g, n(0), &[n(3)]).unwrap()
}

#[test]
fn injected_fault_lies_on_the_route() {
    let mut g = line_with_bypass();
    let route = route_0_to_3(&g);
    let mut injector = FaultInjector::new(7);

    let fault = injector.inject(&mut g, &route, false).unwrap();
    assert!(fault.removed);
    assert!(
        route.segments().any(|(u, v)| (u, v) == (fault.from, fault.to)),
        "fault {fault:?} is not a segment of {route}"
    );
    assert!(!g.has_edge(fault.from, fault.to));
    assert!(!g.has_edge(fault.to, fault.from)); // undirected mirror gone too
}

#[test]
fn degenerate_route_is_rejected() {
    let mut g = line_with_bypass();
    let single = Route { nodes: vec![n(2)], total_distance: 0.0 };
    let mut injector = FaultInjector::new(1);
    assert_eq!(
        injector.inject(&mut g, &single, false).unwrap_err(),
        FaultError::NoActiveRoute
    );
}

#[test]
fn already_missing_edge_reports_not_removed() {
    let mut g = line_with_bypass();
    let route = route_0_to_3(&g);
    // Knock out every route edge up front; the injector's pick must be a no-op.
    for (u, v) in route.segments() {
        g.remove_edge(u, v, false);
    }
    let mut injector = FaultInjector::new(3);
    let fault = injector.inject(&mut g, &route, false).unwrap();
    assert!(!fault.removed);
}

#[test]
fn same_seed_picks_same_edge() {
    let route = route_0_to_3(&line_with_bypass());

    let fault_a = {
        let mut g = line_with_bypass();
        FaultInjector::new(42).inject(&mut g, &route, false).unwrap()
    };
    let fault_b = {
        let mut g = line_with_bypass();
        FaultInjector::new(42).inject(&mut g, &route, false).unwrap()
    };
    assert_eq!(fault_a, fault_b);
}

#[test]
fn directed_injection_spares_reverse_arc() {
    let mut g = Graph::new(2).unwrap();
    g.add_edge(n(0), n(1), 1.0, true).unwrap();
    g.add_edge(n(1), n(0), 1.0, true).unwrap();
    let route = DijkstraPlanner.plan_route(&g, n(0), &[n(1)]).unwrap();

    let fault = FaultInjector::new(0).inject(&mut g, &route, true).unwrap();
    assert_eq!((fault.from, fault.to), (n(0), n(1)));
    assert!(fault.removed);
    assert!(g.has_edge(n(1), n(0)));
}

#[test]
fn replan_after_fault_finds_alternate_or_fails() {
    let mut g = line_with_bypass();
    let route = route_0_to_3(&g);
    assert_eq!(route.nodes, vec![n(0), n(1), n(2), n(3)]);

    let mut injector = FaultInjector::new(11);
    injector.inject(&mut g, &route, false).unwrap();

    // The 0-3 bypass keeps the pair connected whichever edge died.
    let rerouted = DijkstraPlanner.plan_route(&g, n(0), &[n(3)]).unwrap();
    assert!(rerouted.total_distance >= route.total_distance);

    // Sever the bypass and every remaining line edge: now the replan must
    // surface Unreachable rather than fall back silently.
    g.remove_edge(n(0), n(3), false);
    for (u, v) in route.segments() {
        g.remove_edge(u, v, false);
    }
    let err = DijkstraPlanner.plan_route(&g, n(0), &[n(3)]).unwrap_err();
    assert!(matches!(err, PlanError::Unreachable { .. }));
}

#[test]
fn fault_distribution_covers_all_route_edges() {
    // Over many seeds the uniform pick should hit every segment of a
    // three-edge route at least once.
    let base = line_with_bypass();
    let route = route_0_to_3(&base);
    let mut hit = [false; 3];
    for seed in 0..64 {
        let mut g = base.clone();
        let fault: EdgeFault =
            FaultInjector::new(seed).inject(&mut g, &route, false).unwrap();
        let idx = route
            .segments()
            .position(|(u, v)| (u, v) == (fault.from, fault.to))
            .expect("fault must be on the route");
        hit[idx] = true;
    }
    assert!(hit.iter().all(|&h| h), "segment never chosen: {hit:?}");
}
