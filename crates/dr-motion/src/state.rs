//! In-flight motion state and the per-tick report types.

use dr_core::{NodeId, Point};
use dr_plan::Route;

use crate::position::PositionLookup;

// ── Per-tick report ───────────────────────────────────────────────────────────

/// One tick's worth of vehicle pose, handed to whoever renders the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionUpdate {
    /// Interpolated position along the current leg.
    pub position: Point,

    /// Direction of travel in radians (see [`Point::heading_to`]).
    pub heading: f32,

    /// Index of the leg being traversed, `0..route.len()-1`.
    pub leg_index: usize,
}

/// What a single [`tick`](crate::MotionScheduler::tick) call produced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickOutcome {
    /// No motion in flight (idle, cancelled, or already completed).
    Idle,

    /// The vehicle advanced and is still en route.
    Moving(MotionUpdate),

    /// This tick landed the vehicle on the final node.  Reported exactly
    /// once; every later tick is [`TickOutcome::Idle`].
    Completed(MotionUpdate),
}

// ── Active motion ─────────────────────────────────────────────────────────────

/// The state of one animating route.  Owned exclusively by the scheduler;
/// destroyed on completion, cancellation, or a superseding `start`.
#[derive(Debug, Clone)]
pub(crate) struct ActiveMotion {
    pub(crate) route: Route,
    pub(crate) leg_index: usize,

    /// Ticks taken so far on the current leg, `0..=ticks_per_leg`.
    pub(crate) tick_index: u32,
    pub(crate) ticks_per_leg: u32,

    // Leg geometry, latched from the position lookup at the leg boundary so
    // interpolation stays consistent even if nodes are dragged mid-leg.
    pub(crate) leg_start: Point,
    pub(crate) leg_end: Point,
    pub(crate) heading: f32,
}

impl ActiveMotion {
    /// Begin animating `route` at its first leg.  The route must have at
    /// least two nodes — the scheduler validates before constructing.
    pub(crate) fn new<P>(route: Route, ticks_per_leg: u32, positions: &P) -> Self
    where
        P: PositionLookup + ?Sized,
    {
        let mut motion = ActiveMotion {
            route,
            leg_index: 0,
            tick_index: 0,
            ticks_per_leg,
            leg_start: Point::default(),
            leg_end: Point::default(),
            heading: 0.0,
        };
        motion.latch_leg_geometry(positions);
        motion
    }

    /// Number of legs in the route.
    #[inline]
    pub(crate) fn leg_count(&self) -> usize {
        self.route.len() - 1
    }

    /// `true` while traversing the final leg.
    #[inline]
    pub(crate) fn on_last_leg(&self) -> bool {
        self.leg_index + 1 >= self.leg_count()
    }

    /// Step to the next leg: reset the tick counter and re-read both
    /// endpoint positions and the heading.
    pub(crate) fn advance_leg<P>(&mut self, positions: &P)
    where
        P: PositionLookup + ?Sized,
    {
        self.leg_index += 1;
        self.tick_index = 0;
        self.latch_leg_geometry(positions);
    }

    /// Pose at the current tick's interpolation fraction.
    pub(crate) fn interpolated(&self) -> MotionUpdate {
        let f = self.tick_index as f32 / self.ticks_per_leg as f32;
        MotionUpdate {
            position: self.leg_start.lerp(self.leg_end, f),
            heading: self.heading,
            leg_index: self.leg_index,
        }
    }

    /// Pose snapped exactly onto the current leg's endpoint, avoiding any
    /// accumulated floating-point drift.
    pub(crate) fn at_leg_end(&self) -> MotionUpdate {
        MotionUpdate {
            position: self.leg_end,
            heading: self.heading,
            leg_index: self.leg_index,
        }
    }

    fn latch_leg_geometry<P>(&mut self, positions: &P)
    where
        P: PositionLookup + ?Sized,
    {
        let (from, to) = self.leg_nodes();
        self.leg_start = positions.position(from);
        self.leg_end = positions.position(to);
        self.heading = self.leg_start.heading_to(self.leg_end);
    }

    fn leg_nodes(&self) -> (NodeId, NodeId) {
        (
            self.route.nodes[self.leg_index],
            self.route.nodes[self.leg_index + 1],
        )
    }
}
