//! The motion scheduler: a cooperative, single-flow state machine.
//!
//! States: `Idle → Active → Completed`, with `Active → Idle` via
//! [`cancel`](MotionScheduler::cancel) and `Active → Active` via a
//! superseding [`start`](MotionScheduler::start).

use dr_plan::Route;

use crate::position::PositionLookup;
use crate::state::{ActiveMotion, TickOutcome};
use crate::{MotionError, MotionResult};

/// Tick budget per leg at `speed = 1.0`.  Larger speeds divide the budget
/// down (and the caller is expected to shorten the real inter-tick delay to
/// match), so playback gets faster on both axes.
pub const BASE_TICKS: u32 = 35;

enum Phase {
    Idle,
    Active(ActiveMotion),
    Completed,
}

/// Advances one route at a time in discrete, externally clocked ticks.
pub struct MotionScheduler {
    base_ticks: u32,
    phase: Phase,
}

impl MotionScheduler {
    pub fn new() -> Self {
        Self::with_base_ticks(BASE_TICKS)
    }

    /// Override the per-leg tick budget (tests use small budgets to keep
    /// tick loops short).
    pub fn with_base_ticks(base_ticks: u32) -> Self {
        Self {
            base_ticks,
            phase: Phase::Idle,
        }
    }

    // ── State queries ─────────────────────────────────────────────────────

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, Phase::Completed)
    }

    /// The route currently animating, if any.
    pub fn route(&self) -> Option<&Route> {
        match &self.phase {
            Phase::Active(motion) => Some(&motion.route),
            _ => None,
        }
    }

    /// Ticks budgeted for each leg of the active motion.
    pub fn ticks_per_leg(&self) -> Option<u32> {
        match &self.phase {
            Phase::Active(motion) => Some(motion.ticks_per_leg),
            _ => None,
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Begin animating `route` at the given playback `speed`.
    ///
    /// Any in-flight motion is cancelled first, synchronously, so a
    /// superseded route can never report another position.  Each leg gets
    /// `round(BASE_TICKS / speed)` ticks, clamped to at least one so every
    /// leg takes at least one tick.
    ///
    /// # Errors
    ///
    /// - [`MotionError::InvalidSpeed`] if `speed` is not positive and finite;
    /// - [`MotionError::EmptyRoute`] if `route` has fewer than two nodes (a
    ///   degenerate route completes immediately with no ticks — there is
    ///   nothing to animate).
    pub fn start<P>(&mut self, route: Route, speed: f64, positions: &P) -> MotionResult<()>
    where
        P: PositionLookup + ?Sized,
    {
        self.cancel();

        if !speed.is_finite() || speed <= 0.0 {
            return Err(MotionError::InvalidSpeed(speed));
        }
        if route.len() < 2 {
            return Err(MotionError::EmptyRoute);
        }

        let ticks_per_leg = self.ticks_for_speed(speed);
        self.phase = Phase::Active(ActiveMotion::new(route, ticks_per_leg, positions));
        Ok(())
    }

    /// Advance the state machine by one externally clocked tick.
    ///
    /// Returns [`TickOutcome::Idle`] (a no-op) unless a motion is active.
    /// The tick that reaches a leg's budget snaps the position exactly onto
    /// the leg endpoint; the tick that finishes the last leg reports
    /// [`TickOutcome::Completed`] exactly once.
    pub fn tick<P>(&mut self, positions: &P) -> TickOutcome
    where
        P: PositionLookup + ?Sized,
    {
        let Phase::Active(motion) = &mut self.phase else {
            return TickOutcome::Idle;
        };

        motion.tick_index += 1;
        if motion.tick_index < motion.ticks_per_leg {
            return TickOutcome::Moving(motion.interpolated());
        }

        // Leg finished: exact endpoint, then either the next leg or done.
        let update = motion.at_leg_end();
        if motion.on_last_leg() {
            self.phase = Phase::Completed;
            return TickOutcome::Completed(update);
        }
        motion.advance_leg(positions);
        TickOutcome::Moving(update)
    }

    /// Discard any in-progress motion and return to `Idle`.  Safe from any
    /// state; cancelling an idle or completed scheduler is a no-op.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    fn ticks_for_speed(&self, speed: f64) -> u32 {
        let ticks = (self.base_ticks as f64 / speed).round() as u32;
        ticks.max(1)
    }
}

impl Default for MotionScheduler {
    fn default() -> Self {
        Self::new()
    }
}
