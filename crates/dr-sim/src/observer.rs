//! Engine observer trait for progress reporting.

use dr_fault::EdgeFault;
use dr_motion::MotionUpdate;
use dr_plan::Route;

/// Callbacks invoked by [`RoutingEngine`][crate::RoutingEngine] at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The presentation layer implements this
/// to redraw the vehicle each tick; tests implement it to record traces.
///
/// # Example — position printer
///
/// ```rust,ignore
/// struct PositionPrinter;
///
/// impl EngineObserver for PositionPrinter {
///     fn on_update(&mut self, update: &MotionUpdate) {
///         println!("leg {} at {}", update.leg_index, update.position);
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called once per route the engine adopts: the initial plan and every
    /// reroute after a fault.
    fn on_route(&mut self, _route: &Route) {}

    /// Called for every motion tick that moves the vehicle.
    fn on_update(&mut self, _update: &MotionUpdate) {}

    /// Called exactly once when the vehicle reaches the final route node.
    fn on_completed(&mut self, _update: &MotionUpdate) {}

    /// Called after a fault removed (or targeted) an on-route edge, before
    /// the engine replans.
    fn on_fault(&mut self, _fault: &EdgeFault) {}
}

/// An [`EngineObserver`] that does nothing.  Use when you need to drive the
/// engine but don't want callbacks.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
