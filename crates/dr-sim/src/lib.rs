//! `dr-sim` — the engine facade tying graph, planner, fault, and motion
//! together.
//!
//! # Plan / animate / disrupt cycle
//!
//! ```text
//! build graph  → engine.plan(source, waypoints)   → Route stored
//! each tick    → engine.tick(positions, observer) → on_update / on_completed
//! at any point → engine.inject_fault(observer)    → edge removed, chain
//!                                                   replanned, on_route
//! ```
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`engine`]   | `RoutingEngine`, `ActivePlan`                     |
//! | [`config`]   | `EngineConfig`                                    |
//! | [`observer`] | `EngineObserver` callbacks, `NoopObserver`        |
//! | [`error`]    | `EngineError` wrapping every subsystem error      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dr_core::NodeId;
//! use dr_sim::{EngineConfig, NoopObserver, RoutingEngine};
//!
//! let mut engine = RoutingEngine::new(8, EngineConfig::default())?;
//! engine.generate_graph()?;
//! engine.plan(NodeId(0), &[NodeId(5), NodeId(2)], &mut NoopObserver)?;
//! engine.run_motion(1.0, &positions, &mut NoopObserver)?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod observer;

#[cfg(test)]
mod tests;

pub use config::EngineConfig;
pub use engine::{ActivePlan, RoutingEngine};
pub use error::{EngineError, EngineResult};
pub use observer::{EngineObserver, NoopObserver};
