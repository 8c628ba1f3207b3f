//! `dr-motion` — the discrete-tick motion state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`scheduler`] | `MotionScheduler` — start / tick / cancel             |
//! | [`state`]     | `ActiveMotion`, `MotionUpdate`, `TickOutcome`         |
//! | [`position`]  | `PositionLookup` — node → canvas point seam           |
//! | [`error`]     | `MotionError`, `MotionResult<T>`                      |
//!
//! # Pollable by design
//!
//! The scheduler never sleeps and never schedules itself: every advancement
//! happens inside a [`tick`](scheduler::MotionScheduler::tick) call made by
//! an external clock — a UI timer, an event loop, or a test harness looping
//! synchronously.  Between ticks it holds no lock and performs no I/O; it
//! only decides *how many* ticks a leg takes, never how long a tick lasts.
//!
//! # Supersession
//!
//! `start` tears down any in-flight motion synchronously before installing
//! the new route, so at most one route animates at a time and a superseded
//! route can never emit another position update.

pub mod error;
pub mod position;
pub mod scheduler;
pub mod state;


pub use error::{MotionError, MotionResult};
pub use position::PositionLookup;
pub use scheduler::{BASE_TICKS, MotionScheduler};
pub use state::{MotionUpdate, TickOutcome};
