//! The `RoutingEngine` facade and its fault/replan cycle.

use dr_core::{EngineRng, NodeId};
use dr_fault::{EdgeFault, FaultInjector};
use dr_graph::{Graph, random_connected};
use dr_motion::{MotionScheduler, PositionLookup, TickOutcome};
use dr_plan::{DijkstraPlanner, Planner, Route};

use crate::{EngineConfig, EngineError, EngineObserver, EngineResult};

/// Seed-stream offset for the fault injector's derived RNG.
const FAULT_STREAM: u64 = 1;

// ── ActivePlan ────────────────────────────────────────────────────────────────

/// The plan the engine is currently committed to.
///
/// Keeps the original source and waypoint chain alongside the computed route
/// so a fault can replan the *same* request over the mutated graph.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivePlan {
    pub source: NodeId,
    pub waypoints: Vec<NodeId>,
    pub route: Route,
}

// ── RoutingEngine ─────────────────────────────────────────────────────────────

/// One delivery scenario: a graph, a planner, a fault injector, and a motion
/// scheduler behind a single mutation-safe API.
///
/// The cycle a presentation layer drives:
///
/// 1. **Build** — [`add_edge`]/[`remove_edge`], or [`generate_graph`] for a
///    random connected graph.
/// 2. **Plan** — [`plan`] computes and stores the route for a source plus an
///    ordered waypoint chain.
/// 3. **Animate** — [`start_motion`], then [`tick`] on every clock pulse.
/// 4. **Disrupt** — [`inject_fault`] breaks an on-route edge and replans the
///    stored chain; the new route replaces the old one.
///
/// [`add_edge`]: RoutingEngine::add_edge
/// [`remove_edge`]: RoutingEngine::remove_edge
/// [`generate_graph`]: RoutingEngine::generate_graph
/// [`plan`]: RoutingEngine::plan
/// [`start_motion`]: RoutingEngine::start_motion
/// [`tick`]: RoutingEngine::tick
/// [`inject_fault`]: RoutingEngine::inject_fault
pub struct RoutingEngine<P: Planner = DijkstraPlanner> {
    config: EngineConfig,
    graph: Graph,
    planner: P,
    /// Stream for graph generation; the injector holds its own child stream.
    rng: EngineRng,
    injector: FaultInjector,
    scheduler: MotionScheduler,
    plan: Option<ActivePlan>,
}

impl RoutingEngine<DijkstraPlanner> {
    /// Create an engine over an empty `node_count`-node graph with the
    /// default Dijkstra planner.
    pub fn new(node_count: usize, config: EngineConfig) -> EngineResult<Self> {
        Self::with_planner(node_count, config, DijkstraPlanner)
    }
}

impl<P: Planner> RoutingEngine<P> {
    /// Create an engine with a custom planner implementation.
    pub fn with_planner(node_count: usize, config: EngineConfig, planner: P) -> EngineResult<Self> {
        let mut rng = EngineRng::new(config.seed);
        let injector = FaultInjector::from_rng(rng.child(FAULT_STREAM));
        Ok(RoutingEngine {
            graph: Graph::new(node_count)?,
            planner,
            rng,
            injector,
            scheduler: MotionScheduler::with_base_ticks(config.base_ticks),
            plan: None,
            config,
        })
    }

    // ── State queries ─────────────────────────────────────────────────────

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The stored plan, if any.
    pub fn active_plan(&self) -> Option<&ActivePlan> {
        self.plan.as_ref()
    }

    /// The route of the stored plan, if any.
    pub fn active_route(&self) -> Option<&Route> {
        self.plan.as_ref().map(|p| &p.route)
    }

    /// `true` while a motion is in flight.
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_active()
    }

    // ── Graph mutation ────────────────────────────────────────────────────

    /// Discard the graph and start over with `node_count` empty nodes.
    /// Clears the stored plan and cancels any in-flight motion.
    pub fn reset(&mut self, node_count: usize) -> EngineResult<()> {
        self.graph.reset(node_count)?;
        self.clear_plan();
        Ok(())
    }

    /// Replace all edges with a random connected set over the current nodes.
    /// Clears the stored plan and cancels any in-flight motion.
    pub fn generate_graph(&mut self) -> EngineResult<()> {
        self.graph = random_connected(
            self.graph.node_count(),
            self.config.directed,
            &mut self.rng,
        )?;
        self.clear_plan();
        Ok(())
    }

    /// Add (or re-weight) an edge, honouring the configured directedness.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, w: f64) -> EngineResult<()> {
        self.graph.add_edge(u, v, w, self.config.directed)?;
        Ok(())
    }

    /// Remove an edge, honouring the configured directedness.  Returns
    /// whether at least one arc was actually removed.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        self.graph.remove_edge(u, v, self.config.directed)
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Plan a route from `source` through `waypoints` in order and commit to
    /// it, superseding any previous plan and cancelling in-flight motion.
    ///
    /// The request (source + chain) is stored with the route so a later
    /// fault can replan it over the mutated graph.
    pub fn plan<O: EngineObserver>(
        &mut self,
        source: NodeId,
        waypoints: &[NodeId],
        observer: &mut O,
    ) -> EngineResult<&Route> {
        self.scheduler.cancel();
        let route = self.planner.plan_route(&self.graph, source, waypoints)?;
        observer.on_route(&route);
        let plan = self.plan.insert(ActivePlan {
            source,
            waypoints: waypoints.to_vec(),
            route,
        });
        Ok(&plan.route)
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Begin animating the stored route at `speed`.
    ///
    /// Fails with [`EngineError::NoActivePlan`] if nothing has been planned.
    pub fn start_motion<L>(&mut self, speed: f64, positions: &L) -> EngineResult<()>
    where
        L: PositionLookup + ?Sized,
    {
        let route = self
            .active_route()
            .ok_or(EngineError::NoActivePlan)?
            .clone();
        self.scheduler.start(route, speed, positions)?;
        Ok(())
    }

    /// Advance the motion by one tick, forwarding the outcome to `observer`.
    ///
    /// A no-op ([`TickOutcome::Idle`], no callback) when nothing is moving,
    /// so presentation timers may keep firing after completion.
    pub fn tick<L, O>(&mut self, positions: &L, observer: &mut O) -> TickOutcome
    where
        L: PositionLookup + ?Sized,
        O: EngineObserver,
    {
        let outcome = self.scheduler.tick(positions);
        match &outcome {
            TickOutcome::Idle => {}
            TickOutcome::Moving(update) => observer.on_update(update),
            TickOutcome::Completed(update) => observer.on_completed(update),
        }
        outcome
    }

    /// Animate the stored route to completion in a synchronous loop.
    ///
    /// Equivalent to [`start_motion`][Self::start_motion] followed by
    /// [`tick`][Self::tick] until the scheduler reports completion.  Useful
    /// for tests and headless runs; interactive callers tick themselves.
    pub fn run_motion<L, O>(&mut self, speed: f64, positions: &L, observer: &mut O) -> EngineResult<()>
    where
        L: PositionLookup + ?Sized,
        O: EngineObserver,
    {
        self.start_motion(speed, positions)?;
        loop {
            match self.tick(positions, observer) {
                TickOutcome::Moving(_) => {}
                TickOutcome::Completed(_) | TickOutcome::Idle => return Ok(()),
            }
        }
    }

    // ── Fault injection ───────────────────────────────────────────────────

    /// Break one random edge of the active route, then replan the stored
    /// source/waypoint chain over the mutated graph.
    ///
    /// On success the new route replaces the active one (motion is cancelled;
    /// restart it from the new route).  If the chain is now unreachable the
    /// plan is cleared and the planner's error surfaces — no silent fallback.
    ///
    /// Fails with [`EngineError::NoActivePlan`] if nothing has been planned.
    pub fn inject_fault<O: EngineObserver>(&mut self, observer: &mut O) -> EngineResult<EdgeFault> {
        let Some(plan) = &self.plan else {
            return Err(EngineError::NoActivePlan);
        };
        let (source, waypoints) = (plan.source, plan.waypoints.clone());
        // Disjoint field borrows: the injector mutates the graph while the
        // stored route is only read.
        let fault = self
            .injector
            .inject(&mut self.graph, &plan.route, self.config.directed)?;
        observer.on_fault(&fault);
        self.scheduler.cancel();

        match self.planner.plan_route(&self.graph, source, &waypoints) {
            Ok(route) => {
                observer.on_route(&route);
                self.plan = Some(ActivePlan { source, waypoints, route });
                Ok(fault)
            }
            Err(err) => {
                self.plan = None;
                Err(err.into())
            }
        }
    }

    fn clear_plan(&mut self) {
        self.scheduler.cancel();
        self.plan = None;
    }
}
